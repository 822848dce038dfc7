use actix_web::HttpResponse;
use serde_json::json;

/// POST /api/voice
///
/// The voice assistant has not shipped; clients poll this to decide whether
/// to show the feature.
pub async fn voice_status() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Voice endpoint coming soon" }))
}
