//! # Comment Service
//!
//! Orchestrates the create and list flows behind the `/comments` endpoint.
//!
//! ```text
//! create: check_shape → PostResolver::resolve → validate → CommentStore::insert
//! list:   CommentStore::list
//! ```
//!
//! The bearer token arrives as the typed value produced by the auth middleware and
//! is handed unchanged to the post resolver.

use crate::services::posts::PostResolver;
use crate::services::validation::{check_shape, validate};
use lib_auth::BearerToken;
use lib_core::dto::CreateCommentRequest;
use lib_core::model::store::Comment;
use lib_core::{AppError, CommentStore};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Service for comment operations.
pub struct CommentService {
    store: Arc<dyn CommentStore>,
    posts: Arc<dyn PostResolver>,
}

impl CommentService {
    /// Create a new comment service.
    ///
    /// # Arguments
    ///
    /// * `store` - Local comment storage
    /// * `posts` - Resolver for the blog service's post ids
    pub fn new(store: Arc<dyn CommentStore>, posts: Arc<dyn PostResolver>) -> Self {
        Self { store, posts }
    }

    /// All stored comments.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Comment>, AppError> {
        let comments = self.store.list().await.inspect_err(|e| {
            warn!("[COMMENTS] Failed to retrieve comments: {}", e);
        })?;

        info!("[COMMENTS] Listed {} comments", comments.len());
        Ok(comments)
    }

    /// Validate and store a new comment, returning its id.
    ///
    /// # Errors
    ///
    /// * `AppError::BadInput` - Shape rules failed or the post is unknown to the blog service
    /// * `AppError::Upstream` - The blog service could not be queried
    /// * `AppError::Storage` - The insert failed
    #[instrument(skip(self, token, input), fields(post_id = ?input.post_id))]
    pub async fn create(
        &self,
        token: &BearerToken,
        input: CreateCommentRequest,
    ) -> Result<i64, AppError> {
        if let Err(e) = check_shape(&input) {
            warn!("[COMMENTS] Validation failed: {}", e);
            return Err(e.into());
        }

        let post_ids = self.posts.resolve(token).await?;

        let comment = validate(input, &post_ids).inspect_err(|e| {
            warn!("[COMMENTS] Validation failed: {}", e);
        })?;

        let id = self.store.insert(&comment).await.inspect_err(|e| {
            warn!("[COMMENTS] Failed to save comment for post {}: {}", comment.post_id, e);
        })?;

        info!("[COMMENTS] Comment {} created for post {}", id, comment.post_id);
        Ok(id)
    }
}
