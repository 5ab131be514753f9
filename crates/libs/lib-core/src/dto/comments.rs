//! # Comment Data Transfer Objects
//!
//! Request and response bodies of the `/comments` endpoint.
//!
//! ## Create Comment
//!
//! ```text
//! POST /comments
//! Authorization: Bearer <token>
//! Content-Type: application/json
//!
//! {"post_id": 1, "title": "Nice", "content": "Good post"}
//! ```
//!
//! Response (`201 Created`):
//! ```text
//! {"message": "Comment created successfully"}
//! ```
//!
//! ## List Comments
//!
//! `GET /comments` returns the stored rows directly as
//! [`Comment`](crate::model::store::Comment) objects.

use serde::{Deserialize, Serialize};

/// Body of `POST /comments`.
///
/// Every field defaults when absent so that a missing field is reported by
/// validation ("post_id is required") rather than as an unreadable body.
/// Wrong JSON types are still a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Confirmation body for successful writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let req: CreateCommentRequest = serde_json::from_str(r#"{"title": "Nice"}"#).unwrap();
        assert_eq!(req.post_id, None);
        assert_eq!(req.title, "Nice");
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let res = serde_json::from_str::<CreateCommentRequest>(
            r#"{"post_id": "one", "title": "Nice", "content": "Good post"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_null_post_id_is_missing() {
        let req: CreateCommentRequest =
            serde_json::from_str(r#"{"post_id": null, "title": "a", "content": "b"}"#).unwrap();
        assert_eq!(req.post_id, None);
    }
}
