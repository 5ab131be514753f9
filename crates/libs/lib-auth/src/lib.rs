//! # Authentication Library
//!
//! Bearer-token credentials and verification against the external identity service.
//!
//! This service never decodes tokens itself. A token is only parsed out of the
//! `Authorization` header ([`token`]) and then checked remotely ([`verify`]).

pub mod token;
pub mod verify;

// Re-export commonly used types
pub use token::{BearerToken, TokenError};
pub use verify::{HttpIdentityVerifier, IdentityVerifier, VerifyError};
