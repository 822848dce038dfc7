use actix_web::{HttpResponse, web};

use crate::forum::model::{Comment, CreateCommentRequest, CreatePostRequest, Post};
use crate::forum::service::ForumService;
use crate::utils::error::ApiError;

/// GET /api/forum
pub async fn list_posts(forum: web::Data<ForumService>) -> Result<HttpResponse, ApiError> {
    let posts = forum.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/forum
pub async fn create_post(
    forum: web::Data<ForumService>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let post = forum.create_post(Post::new(request)).await?;
    Ok(HttpResponse::Created().json(post))
}

/// POST /api/forum/{id}/like
pub async fn like_post(
    forum: web::Data<ForumService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let post = forum.like_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/forum/{id}/comment
pub async fn add_comment(
    forum: web::Data<ForumService>,
    post_id: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Comment text cannot be empty".to_string(),
        ));
    }

    let post = forum.add_comment(&post_id, Comment::new(request)).await?;
    Ok(HttpResponse::Ok().json(post))
}
