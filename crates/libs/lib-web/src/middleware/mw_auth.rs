//! # Authentication Middleware
//!
//! Gate in front of every route. Extracts the `Authorization: Bearer <token>`
//! header, verifies the token with the identity service, and injects the typed
//! [`BearerToken`] into the request extensions for handlers.
//!
//! ```text
//! Received → TokenExtracted → Verified → Forwarded
//!     └──────────┴──────────────┴──→ Rejected (401)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware, Router, routing::get};
//! use lib_web::middleware::mw_auth::require_auth;
//!
//! let app = Router::new()
//!     .route("/comments", get(handler))
//!     .layer(middleware::from_fn_with_state(state.clone(), require_auth))
//!     .with_state(state);
//! ```
//!
//! Handlers then take the credential with `Extension<BearerToken>`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{BearerToken, IdentityVerifier};
use lib_core::AppError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication middleware that verifies bearer tokens remotely.
///
/// # Behavior
///
/// - **Missing header / not `Bearer`**: `401 {"error": "Unauthorized: Missing token"}`,
///   the identity service is not called
/// - **Identity service unreachable or not 200**: `401 {"error": "Unauthorized: Invalid token"}`
/// - **Verified**: continues with the request unchanged apart from the added extension
pub async fn require_auth(
    State(verifier): State<Arc<dyn IdentityVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        BearerToken::from_header(header).map_err(|e| {
            warn!("[AUTH] {} {}: {}", req.method(), req.uri().path(), e);
            AppError::Unauthorized("Missing token".to_string())
        })?
    };

    verifier.verify(&token).await.map_err(|e| {
        warn!("[AUTH] Token verification failed: {}", e);
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    debug!("[AUTH] Token verified");

    req.extensions_mut().insert(token);

    Ok(next.run(req).await)
}
