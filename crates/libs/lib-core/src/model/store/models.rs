use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Comment entity representing a row of the `comments` table.
///
/// Serialized as-is in `GET /comments` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub title: String,
    pub content: String,
}

/// Data structure for creating a new comment.
///
/// Only produced by validation, so holding one means the shape rules passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForCreate {
    pub post_id: i64,
    pub title: String,
    pub content: String,
}

impl CommentForCreate {
    /// Create a new `CommentForCreate` instance.
    pub fn new(post_id: i64, title: String, content: String) -> Self {
        Self {
            post_id,
            title,
            content,
        }
    }
}
