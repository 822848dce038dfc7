use super::controller::get_weather;
use actix_web::web;

pub fn weather_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/weather").route("", web::get().to(get_weather)));
}
