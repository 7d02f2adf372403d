//! Token signing configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret for signing and verifying tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Algorithm for JWT signing (only HS256 is accepted by the core)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 86_400,   // 24 hours
            refresh_token_expiry: 604_800, // 168 hours
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// `JWT_SECRET` wins over the legacy `SECRET_KEY`.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .or_else(|_| std::env::var("SECRET_KEY"))
            .unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(604_800);

        Self {
            secret,
            access_token_expiry,
            refresh_token_expiry,
            algorithm: default_algorithm(),
        }
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry = hours * 3600;
        self
    }

    /// Set refresh token expiry in hours
    pub fn with_refresh_expiry_hours(mut self, hours: i64) -> Self {
        self.refresh_token_expiry = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
