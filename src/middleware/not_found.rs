use actix_web::HttpResponse;
use serde_json::json;

/// Fallback handler for unmatched routes, registered as the app's default
/// service so the API answers JSON even for 404s. Handler-level 404s (unknown
/// post ids, empty market data) keep their own messages.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}
