use super::controller::get_market_prices;
use actix_web::web;

pub fn market_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/market")
            .route("", web::get().to(get_market_prices))
            .route("", web::post().to(get_market_prices)),
    );
    // the earlier app shell exposed the same lookup under /api/mandi
    cfg.route("/mandi", web::get().to(get_market_prices));
}
