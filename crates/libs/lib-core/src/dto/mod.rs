//! # Data Transfer Objects (DTOs)
//!
//! Wire structures for the `/comments` endpoint and for the external blog service.

pub mod comments;
pub mod posts;

pub use comments::*;
pub use posts::*;
