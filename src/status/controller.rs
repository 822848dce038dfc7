use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::database::Database;

/// GET /api/test-db
pub async fn test_db(database: web::Data<Database>) -> HttpResponse {
    match database.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Connected to MongoDB successfully!",
        })),
        Err(e) => {
            log::error!("Database ping failed: {e}");
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "Failed to connect to database",
                "error": e.to_string(),
            }))
        }
    }
}
