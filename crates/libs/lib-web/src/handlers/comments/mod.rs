//! # Comment Handlers
//!
//! ## Endpoints
//!
//! - `GET /comments` → `200 [{"id", "post_id", "title", "content"}]`
//! - `POST /comments` with `{"post_id", "title", "content"}` → `201 {"message": "Comment created successfully"}`
//! - any other method → `405`
//!
//! The request body is decoded by hand rather than with the `Json` extractor so
//! that malformed bodies get the same JSON error shape as every other failure.

use crate::services::CommentService;
use axum::{
    body::Bytes,
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use lib_auth::BearerToken;
use lib_core::dto::{CreateCommentRequest, MessageResponse};
use lib_core::model::store::Comment;
use lib_core::AppError;
use std::sync::Arc;
use tracing::{debug, instrument};

/// List every stored comment.
#[instrument(skip(service))]
pub async fn list_comments(
    State(service): State<Arc<CommentService>>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = service.list().await?;
    Ok(Json(comments))
}

/// Create a comment after checking its post against the blog service.
///
/// # Responses
///
/// - `201` - stored
/// - `400` - unreadable body, missing/empty fields, or unknown `post_id`
/// - `500` - blog service or storage failure
#[instrument(skip(service, token, body))]
pub async fn create_comment(
    State(service): State<Arc<CommentService>>,
    Extension(token): Extension<BearerToken>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let req: CreateCommentRequest = serde_json::from_slice(&body)?;
    debug!("[COMMENTS] Create request for post {:?}", req.post_id);

    service.create(&token, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Comment created successfully")),
    ))
}

#[cfg(test)]
mod tests;
