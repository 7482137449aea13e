//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

/// Auth application configuration
///
/// There is no `Default` impl: the signing secret must be injected at
/// startup, and a missing secret is a fatal configuration error rather
/// than a silent weak fallback.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub token_secret: String,
    /// Token validity window (7 days)
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Default token validity window
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

    /// Create config from an injected secret
    pub fn new(token_secret: impl Into<String>) -> AppResult<Self> {
        let token_secret = token_secret.into();
        if token_secret.trim().is_empty() {
            return Err(AppError::internal("Token signing secret must not be empty"));
        }

        Ok(Self {
            token_secret,
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        })
    }

    /// Override the token validity window
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
