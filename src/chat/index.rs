use super::controller::chat;
use actix_web::web;

pub fn chat_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/chat").route("", web::post().to(chat)));
}
