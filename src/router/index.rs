use actix_web::web;

use crate::calendar::index::calendar_routes;
use crate::chat::index::chat_routes;
use crate::diagnose::index::diagnose_routes;
use crate::forum::index::forum_routes;
use crate::market::index::market_routes;
use crate::schemes::index::schemes_routes;
use crate::status::index::status_routes;
use crate::voice::index::voice_routes;
use crate::weather::index::weather_routes;

/// Every feature hangs off /api, one scope per feature.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(chat_routes)
            .configure(diagnose_routes)
            .configure(calendar_routes)
            .configure(market_routes)
            .configure(weather_routes)
            .configure(forum_routes)
            .configure(schemes_routes)
            .configure(voice_routes)
            .configure(status_routes),
    );
}
