//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used consistently
//! across the service. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! Every failure is turned into an `AppError` at the boundary where it is detected
//! and rendered as a JSON body. Nothing in the request pipeline retries.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`BadInput`](AppError::BadInput) → 400 Bad Request
//!    - [`Unauthorized`](AppError::Unauthorized) → 401 Unauthorized
//!    - [`MethodNotAllowed`](AppError::MethodNotAllowed) → 405 Method Not Allowed
//!
//! 2. **Server Errors** (5xx)
//!    - [`Upstream`](AppError::Upstream) → 500 (blog or identity service failure)
//!    - [`Storage`](AppError::Storage) → 500 (local persistence failure)
//!    - [`Config`](AppError::Config) → 500
//!
//! ## Wire Format
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//! Content-Type: application/json
//!
//! {"error": "Invalid Post ID", "code": "BadInput"}
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_title(title: &str) -> Result<&str> {
//!     if title.is_empty() {
//!         return Err(AppError::BadInput("title cannot be empty".to_string()));
//!     }
//!     Ok(title)
//! }
//! ```

use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed body, missing fields, or a post reference the blog service does not know.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Bad input: {0}")]
    BadInput(String),

    /// Missing, malformed, or unverifiable bearer token.
    ///
    /// **HTTP Status**: 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The route exists but not for this HTTP method.
    ///
    /// **HTTP Status**: 405 Method Not Allowed
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// External collaborator unreachable, timed out, or answered with a failure.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Local comment storage unreachable or erroring.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream(_) | AppError::Storage(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message returned to the caller.
    ///
    /// Server-side failures return a fixed message; the detail only goes to the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::BadInput(msg) => msg.clone(),
            AppError::Unauthorized(msg) => format!("Unauthorized: {}", msg),
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::Upstream(_) => "Failed to validate post reference".to_string(),
            AppError::Storage(_) => "Failed to access comment storage".to_string(),
            AppError::Config(_) => "An internal error occurred".to_string(),
        }
    }

    /// Short variant name used as the `code` field of the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadInput(_) => "BadInput",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::MethodNotAllowed => "MethodNotAllowed",
            AppError::Upstream(_) => "Upstream",
            AppError::Storage(_) => "Storage",
            AppError::Config(_) => "Config",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(code = self.code(), "Server error: {}", self);
            }
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("Client error: {}", self);
            }
            _ => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let body = Json(ErrorResponse {
            error: self.user_message(),
            code: Some(self.code().to_string()),
        });

        (status, body).into_response()
    }
}

/// Convert `sqlx::Error` to `AppError`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                AppError::Storage(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Storage(format!("Database error: {}", err)),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
///
/// Only request bodies are decoded with `serde_json` on the inbound side, so a
/// decoding failure is always the caller's fault.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        AppError::BadInput("Invalid request body".to_string())
    }
}
