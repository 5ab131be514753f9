//! # Model Layer
//!
//! Locally owned entities and their storage.

pub mod store;
