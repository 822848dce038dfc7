use super::controller::{add_comment, create_post, like_post, list_posts};
use actix_web::web;

pub fn forum_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/forum")
            .route("", web::get().to(list_posts))
            .route("", web::post().to(create_post))
            .route("/{id}/like", web::post().to(like_post))
            .route("/{id}/comment", web::post().to(add_comment)),
    );
}
