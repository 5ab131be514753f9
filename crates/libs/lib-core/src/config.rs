//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The loaded [`Config`] is owned by the server state and handed to the components
//! that need it; nothing reads the environment after startup.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `BLOG_SERVICE_URL` | yes | |
//! | `TOKEN_VERIFY_URL` | yes | |
//! | `PORT` | no | `8080` |
//! | `DATABASE_URL` | no | `sqlite:comments.db` |
//! | `HTTP_TIMEOUT_SECS` | no | `10` |

use lib_utils::{get_env, get_env_or, get_env_parse_or, validate_http_url};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:comments.db";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Base URL of the external blog service (`/blogs` is appended)
    pub blog_service_url: String,

    /// Identity-verification endpoint receiving `{"token": ...}`
    pub token_verify_url: String,

    /// TCP port the HTTP server listens on
    pub port: u16,

    /// Upper bound for each outbound HTTP call, in seconds
    ///
    /// Valid range: 1-300
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let blog_service_url = get_env("BLOG_SERVICE_URL").map_err(|e| e.to_string())?;
        let token_verify_url = get_env("TOKEN_VERIFY_URL").map_err(|e| e.to_string())?;

        let database_url = get_env_or("DATABASE_URL", DEFAULT_DATABASE_URL);

        let port = get_env_parse_or("PORT", DEFAULT_PORT)
            .map_err(|e| format!("{}: expected a port number", e))?;

        let http_timeout_secs = get_env_parse_or("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
            .map_err(|e| format!("{}: expected a number of seconds", e))?;

        Ok(Self {
            database_url,
            blog_service_url: blog_service_url.trim_end_matches('/').to_string(),
            token_verify_url,
            port,
            http_timeout_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_http_url(&self.blog_service_url, "BLOG_SERVICE_URL")?;
        validate_http_url(&self.token_verify_url, "TOKEN_VERIFY_URL")?;

        if self.http_timeout_secs < 1 || self.http_timeout_secs > 300 {
            return Err("HTTP_TIMEOUT_SECS must be between 1 and 300".to_string());
        }

        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Timeout applied to the identity and blog service calls.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
