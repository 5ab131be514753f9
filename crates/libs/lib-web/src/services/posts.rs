//! # Post Resolver
//!
//! Fetches the set of post ids visible to a caller from the external blog service.
//!
//! ```text
//! GET <BLOG_SERVICE_URL>/blogs
//! Authorization: Bearer <token>
//!
//! 200 OK
//! [{"id": 1, "title": "...", "body": "..."}, ...]
//! ```
//!
//! Every call fetches the complete list again. Nothing is cached, so a
//! comment is always checked against the blog service's state at the moment
//! it is written.

use async_trait::async_trait;
use lib_auth::BearerToken;
use lib_core::{dto::Post, AppError};
use reqwest::Client;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Why the post set could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("blog service URL is not configured")]
    NotConfigured,

    #[error("blog service request failed: {0}")]
    Network(String),

    #[error("blog service returned status {0}")]
    Status(u16),

    #[error("blog service response is not a list of posts: {0}")]
    Parse(String),
}

impl From<ResolverError> for AppError {
    fn from(err: ResolverError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Resolution seam used by the comment service.
#[async_trait]
pub trait PostResolver: Send + Sync {
    /// Ids of every post the blog service exposes to `token`.
    async fn resolve(&self, token: &BearerToken) -> Result<HashSet<i64>, ResolverError>;
}

/// [`PostResolver`] backed by the blog service's HTTP API.
#[derive(Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    /// Create a client for the blog service at `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn posts_url(&self) -> Result<String, ResolverError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ResolverError::NotConfigured);
        }
        Ok(format!("{}/blogs", base.trim_end_matches('/')))
    }
}

#[async_trait]
impl PostResolver for BlogClient {
    #[instrument(skip(self, token))]
    async fn resolve(&self, token: &BearerToken) -> Result<HashSet<i64>, ResolverError> {
        let url = self.posts_url().inspect_err(|_| {
            error!("[POSTS] Blog service URL is not configured");
        })?;

        debug!("[POSTS] Fetching posts from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| {
                error!("[POSTS] Request to blog service failed: {}", e);
                ResolverError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            error!("[POSTS] Blog service returned {}", response.status());
            return Err(ResolverError::Status(response.status().as_u16()));
        }

        let posts: Vec<Post> = response.json().await.map_err(|e| {
            error!("[POSTS] Failed to parse blog service response: {}", e);
            ResolverError::Parse(e.to_string())
        })?;

        debug!("[POSTS] Resolved {} posts", posts.len());

        Ok(posts.into_iter().map(|post| post.id).collect())
    }
}
