//! # HTTP Request Handlers
//!
//! Axum handlers, one module per feature.
//!
//! - **[`comments`]**
//!   - `GET /comments` - list every stored comment
//!   - `POST /comments` - validate and store a comment
//!
//! Every route sits behind [`require_auth`](crate::middleware::require_auth), so
//! handlers can rely on an `Extension<BearerToken>` being present.
//!
//! ## Error Handling
//!
//! Handlers return `Result<T, AppError>`; `AppError` renders itself as
//! `(status, {"error": ..., "code": ...})`.

pub mod comments;

use axum::http::Uri;
use lib_core::AppError;
use tracing::info;

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    info!("[404 HANDLER] Unmatched route: {}", uri.path());
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({ "error": "Route not found" })),
    )
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
