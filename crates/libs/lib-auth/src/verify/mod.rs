//! # Identity Verification
//!
//! Confirms a bearer token with the external identity service.
//!
//! ```text
//! POST <TOKEN_VERIFY_URL>
//! Content-Type: application/json
//!
//! {"token": "<token>"}
//! ```
//!
//! A `200 OK` means the token is valid. The response body is not interpreted.

use crate::token::BearerToken;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a token could not be verified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The identity service could not be reached or timed out.
    #[error("identity service unreachable: {0}")]
    Network(String),

    /// The identity service answered with something other than `200 OK`.
    #[error("identity service rejected token with status {0}")]
    Rejected(u16),
}

/// Verification seam used by the authentication middleware.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Succeeds only if the identity service accepts `token`.
    async fn verify(&self, token: &BearerToken) -> Result<(), VerifyError>;
}

#[derive(Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

/// [`IdentityVerifier`] backed by an HTTP call to the identity service.
#[derive(Clone)]
pub struct HttpIdentityVerifier {
    client: Client,
    verify_url: String,
}

impl HttpIdentityVerifier {
    /// Create a verifier posting to `verify_url`.
    ///
    /// `client` should carry a request timeout; the call blocks the request being
    /// authenticated until it returns.
    pub fn new(client: Client, verify_url: impl Into<String>) -> Self {
        Self {
            client,
            verify_url: verify_url.into(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &BearerToken) -> Result<(), VerifyError> {
        debug!("[AUTH] Verifying token with {}", self.verify_url);

        let response = self
            .client
            .post(&self.verify_url)
            .json(&VerifyTokenRequest { token: token.as_str() })
            .send()
            .await
            .map_err(|e| {
                warn!("[AUTH] Identity service request failed: {}", e);
                VerifyError::Network(e.to_string())
            })?;

        if response.status() != StatusCode::OK {
            warn!("[AUTH] Identity service returned {}", response.status());
            return Err(VerifyError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}
