use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{self, Bson, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;

use crate::database::Database;
use crate::forum::model::{Comment, Post};
use crate::utils::error::ApiError;

pub struct ForumService {
    collection: Collection<Post>,
}

impl ForumService {
    pub fn new(database: &Database) -> Self {
        let collection = database.database().collection::<Post>("posts");
        ForumService { collection }
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to fetch posts: {e}")))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to fetch posts: {e}")))
    }

    pub async fn create_post(&self, post: Post) -> Result<Post, ApiError> {
        self.collection
            .insert_one(&post)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to create post: {e}")))?;

        Ok(post)
    }

    /// Register one like. A single `$inc` keeps concurrent likes from losing
    /// counts.
    pub async fn like_post(&self, id: &str) -> Result<Post, ApiError> {
        let object_id = parse_post_id(id)?;

        let update = doc! {
            "$inc": { "likes": 1 },
            "$set": { "updatedAt": now_bson()? },
        };

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to update post: {e}")))?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
    }

    /// Append a comment atomically; `$push` preserves arrival order.
    pub async fn add_comment(&self, id: &str, comment: Comment) -> Result<Post, ApiError> {
        let object_id = parse_post_id(id)?;

        let comment = bson::to_bson(&comment)
            .map_err(|e| ApiError::Internal(format!("Failed to encode comment: {e}")))?;
        let update = doc! {
            "$push": { "comments": comment },
            "$set": { "updatedAt": now_bson()? },
        };

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to update post: {e}")))?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
    }
}

/// A malformed id cannot name a post, so it gets the same 404 as an unknown
/// one.
fn parse_post_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::NotFound("Post not found".to_string()))
}

fn now_bson() -> Result<Bson, ApiError> {
    bson::to_bson(&Utc::now())
        .map_err(|e| ApiError::Internal(format!("Failed to encode timestamp: {e}")))
}
