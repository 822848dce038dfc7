use super::controller::voice_status;
use actix_web::web;

pub fn voice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/voice").route("", web::post().to(voice_status)));
}
