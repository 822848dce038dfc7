use super::controller::list_schemes;
use actix_web::web;

pub fn schemes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/schemes").route("", web::get().to(list_schemes)));
}
