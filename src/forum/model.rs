use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A community post with its embedded comments. Comments never outgrow the
/// document limit in practice, so they live inside the post.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub likes: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment embedded in its parent post. Comments are append-only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub author: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub author: String,
    pub text: String,
}

impl Post {
    /// Build a fresh post from a create request. The store never sees a post
    /// without a server-assigned id and timestamps.
    pub fn new(request: CreatePostRequest) -> Self {
        let now = Utc::now();
        Post {
            id: ObjectId::new(),
            author: non_blank_or(request.author, "Anonymous"),
            title: request.title,
            content: request.content,
            likes: 0,
            comments: Vec::new(),
            tag: non_blank_or(request.tag, "General"),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Comment {
    pub fn new(request: CreateCommentRequest) -> Self {
        Comment {
            author: non_blank_or(request.author, "User"),
            text: request.text,
            timestamp: Utc::now(),
        }
    }
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_apply() {
        let request: CreatePostRequest = serde_json::from_str(
            r#"{"title": "Best wheat variety?", "content": "Looking for high-yield seeds"}"#,
        )
        .unwrap();

        let post = Post::new(request);
        assert_eq!(post.author, "Anonymous");
        assert_eq!(post.tag, "General");
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn blank_author_counts_as_missing() {
        let request: CreatePostRequest = serde_json::from_str(
            r#"{"author": "   ", "title": "t", "content": "c", "tag": ""}"#,
        )
        .unwrap();

        let post = Post::new(request);
        assert_eq!(post.author, "Anonymous");
        assert_eq!(post.tag, "General");
    }

    #[test]
    fn posts_serialize_with_wire_field_names() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        let value = serde_json::to_value(Post::new(request)).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value["_id"]["$oid"].is_string());
        assert_eq!(value["comments"], serde_json::json!([]));
    }

    #[test]
    fn comment_author_defaults_to_user() {
        let request: CreateCommentRequest =
            serde_json::from_str(r#"{"text": "Try HD-2967"}"#).unwrap();

        let comment = Comment::new(request);
        assert_eq!(comment.author, "User");
        assert_eq!(comment.text, "Try HD-2967");
    }

    #[test]
    fn posts_round_trip_through_bson() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        let post = Post::new(request);

        let doc = mongodb::bson::to_document(&post).unwrap();
        assert!(doc.contains_key("createdAt"));

        let back: Post = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.created_at, post.created_at);
        assert_eq!(back.likes, 0);
    }
}
