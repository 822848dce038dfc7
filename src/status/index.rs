use super::controller::test_db;
use actix_web::web;

pub fn status_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/test-db", web::get().to(test_db));
}
