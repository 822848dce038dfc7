use super::controller::diagnose;
use actix_web::web;

pub fn diagnose_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/diagnose").route("", web::post().to(diagnose)));
}
