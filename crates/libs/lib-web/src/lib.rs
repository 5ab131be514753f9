//! # Web Library
//!
//! HTTP surface of the comments service: middleware, handlers, services, and
//! server wiring.
//!
//! ```text
//! Client Request
//!     ↓
//! stamp_req → TraceLayer → log_requests
//!     ↓
//! require_auth (identity service)
//!     ↓
//! handlers::comments → CommentService → {CommentStore, PostResolver}
//! ```
//!
//! ## Endpoints
//!
//! ```text
//! curl -H "Authorization: Bearer $TOKEN" http://localhost:8080/comments
//!
//! curl -X POST -H "Authorization: Bearer $TOKEN" \
//!      -d '{"post_id": 1, "title": "Nice", "content": "Good post"}' \
//!      http://localhost:8080/comments
//! ```

pub mod handlers;
pub mod middleware;
pub mod services;
pub mod server;

pub use server::{create_router, start_server, AppState};
