use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::schemes::service::SchemesService;

const DEFAULT_STATE: &str = "Rajasthan";

#[derive(Debug, Deserialize)]
pub struct SchemesQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// GET /api/schemes
pub async fn list_schemes(
    schemes: web::Data<SchemesService>,
    query: web::Query<SchemesQuery>,
) -> HttpResponse {
    let state = query
        .state
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_STATE);

    let matches = schemes.search(query.q.as_deref(), state);

    HttpResponse::Ok().json(json!({
        "count": matches.len(),
        "schemes": matches,
    }))
}
