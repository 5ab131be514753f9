//! # Core Library
//!
//! Configuration, error handling, DTOs, and comment storage for the comments service.

pub mod config;
pub mod error;
pub mod model;
pub mod dto;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{CommentStore, DbPool, create_pool, init_schema};
