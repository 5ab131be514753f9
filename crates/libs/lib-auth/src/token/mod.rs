//! # Bearer Token
//!
//! Typed credential extracted once from the `Authorization` header.
//!
//! The same token authenticates the caller to the identity service and to the
//! blog service, so it is passed along as a [`BearerToken`] value instead of
//! being re-read from headers further down the call chain.

use std::fmt;
use thiserror::Error;

/// Authorization scheme prefix, including the separating space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Reasons an `Authorization` header does not yield a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Authorization header is missing")]
    MissingHeader,

    #[error("Authorization header does not use the Bearer scheme")]
    InvalidScheme,

    #[error("Bearer token is empty")]
    Empty,
}

/// Opaque bearer credential.
///
/// `Debug` never prints the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse the value of an `Authorization` header.
    ///
    /// # Errors
    ///
    /// - [`TokenError::MissingHeader`] if `header` is `None`
    /// - [`TokenError::InvalidScheme`] if the value does not start with `Bearer `
    /// - [`TokenError::Empty`] if only whitespace follows the prefix
    ///
    /// The remainder after the prefix is kept verbatim.
    pub fn from_header(header: Option<&str>) -> Result<Self, TokenError> {
        let value = header.ok_or(TokenError::MissingHeader)?;

        let token = value
            .strip_prefix(BEARER_PREFIX)
            .ok_or(TokenError::InvalidScheme)?;

        if token.trim().is_empty() {
            return Err(TokenError::Empty);
        }

        Ok(Self(token.to_string()))
    }

    /// The raw token, for forwarding to external services.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bearer_header() {
        let token = BearerToken::from_header(Some("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(BearerToken::from_header(None), Err(TokenError::MissingHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            BearerToken::from_header(Some("Basic dXNlcjpwYXNz")),
            Err(TokenError::InvalidScheme)
        );
        // Scheme match is case-sensitive, like the upstream services.
        assert_eq!(
            BearerToken::from_header(Some("bearer abc")),
            Err(TokenError::InvalidScheme)
        );
        assert_eq!(
            BearerToken::from_header(Some("Bearer")),
            Err(TokenError::InvalidScheme)
        );
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(BearerToken::from_header(Some("Bearer ")), Err(TokenError::Empty));
        assert_eq!(BearerToken::from_header(Some("Bearer    ")), Err(TokenError::Empty));
    }

    #[test]
    fn test_token_is_forwarded_verbatim() {
        let token = BearerToken::from_header(Some("Bearer  abc ")).unwrap();
        assert_eq!(token.as_str(), " abc ");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = BearerToken::from_header(Some("Bearer secret-value")).unwrap();
        assert_eq!(format!("{:?}", token), "BearerToken(***)");
    }
}
