use super::controller::generate_calendar;
use actix_web::web;

pub fn calendar_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/calendar").route("", web::post().to(generate_calendar)));
}
