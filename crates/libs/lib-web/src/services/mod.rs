//! # Services Layer
//!
//! Business logic between the HTTP handlers and the storage / external services:
//!
//! ```text
//! Handlers (HTTP) → CommentService → CommentStore (SQLite)
//!                                  → PostResolver (blog service)
//! ```
//!
//! - [`comments`] - create/list orchestration
//! - [`posts`] - blog service client
//! - [`validation`] - pure comment checks
//!
//! All services return `Result<T, AppError>`; component errors convert into
//! `AppError` with `From` so `?` carries them to the handler.

pub mod comments;
pub mod posts;
pub mod validation;

pub use comments::CommentService;
pub use posts::{BlogClient, PostResolver, ResolverError};
pub use validation::ValidationError;
