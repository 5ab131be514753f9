//! # Comment Validation
//!
//! Pure checks applied to a comment before it is stored. Rules run in order and
//! the first failure wins:
//!
//! 1. `post_id` is present and non-zero
//! 2. `title` is not empty
//! 3. `content` is not empty
//! 4. `post_id` is one of the ids resolved from the blog service
//!
//! Rules 1-3 are available on their own as [`check_shape`] so callers can
//! reject malformed input before paying for the blog service round-trip.

use lib_core::{dto::CreateCommentRequest, model::store::CommentForCreate, AppError};
use lib_utils::{validate_nonzero_id, validate_not_empty};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("post_id is required")]
    MissingPostId,

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("Invalid Post ID")]
    UnknownPost(i64),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadInput(err.to_string())
    }
}

/// Apply the local shape rules; returns the post id on success.
pub fn check_shape(input: &CreateCommentRequest) -> Result<i64, ValidationError> {
    let post_id = validate_nonzero_id(input.post_id, "post_id")
        .map_err(|_| ValidationError::MissingPostId)?;
    validate_not_empty(&input.title, "title").map_err(|_| ValidationError::EmptyTitle)?;
    validate_not_empty(&input.content, "content").map_err(|_| ValidationError::EmptyContent)?;
    Ok(post_id)
}

/// Apply every rule and produce the record to insert.
pub fn validate(
    input: CreateCommentRequest,
    resolved_post_ids: &HashSet<i64>,
) -> Result<CommentForCreate, ValidationError> {
    let post_id = check_shape(&input)?;

    if !resolved_post_ids.contains(&post_id) {
        return Err(ValidationError::UnknownPost(post_id));
    }

    Ok(CommentForCreate::new(post_id, input.title, input.content))
}
