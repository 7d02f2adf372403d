//! Configuration for the token service

use std::time::Duration as StdDuration;

use chrono::Duration;
use tl_shared::config::{DatabaseConfig, JwtConfig};

use crate::domain::entities::{ACCESS_TOKEN_EXPIRY_HOURS, REFRESH_TOKEN_EXPIRY_HOURS};
use crate::domain::value_objects::SigningSecret;
use crate::errors::DomainError;

/// Default bound for a single token upsert
pub const DEFAULT_PERSIST_TIMEOUT: StdDuration = StdDuration::from_secs(100);

/// Longest accepted token lifetime (10 years)
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 10 * 365 * 24 * 3600;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub secret: SigningSecret,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
    /// Deadline for persisting a token pair
    pub persist_timeout: StdDuration,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<SigningSecret>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl: Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS),
            refresh_token_ttl: Duration::hours(REFRESH_TOKEN_EXPIRY_HOURS),
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }

    /// Builds the service configuration from the shared application config
    ///
    /// Only HS256 is supported, and both lifetimes must lie in
    /// `1..=MAX_TOKEN_LIFETIME_SECS` seconds.
    pub fn from_shared(jwt: &JwtConfig, database: &DatabaseConfig) -> Result<Self, DomainError> {
        if !jwt.algorithm.eq_ignore_ascii_case("HS256") {
            return Err(DomainError::Config {
                message: format!("unsupported signing algorithm: {}", jwt.algorithm),
            });
        }

        Ok(Self {
            secret: SigningSecret::new(&jwt.secret),
            access_token_ttl: lifetime("access", jwt.access_token_expiry)?,
            refresh_token_ttl: lifetime("refresh", jwt.refresh_token_expiry)?,
            persist_timeout: database.operation_timeout_duration(),
        })
    }

    pub fn with_persist_timeout(mut self, timeout: StdDuration) -> Self {
        self.persist_timeout = timeout;
        self
    }
}

fn lifetime(kind: &str, seconds: i64) -> Result<Duration, DomainError> {
    if !(1..=MAX_TOKEN_LIFETIME_SECS).contains(&seconds) {
        return Err(DomainError::Config {
            message: format!(
                "{} token lifetime must be between 1 and {} seconds, got {}",
                kind, MAX_TOKEN_LIFETIME_SECS, seconds
            ),
        });
    }
    Duration::try_seconds(seconds).ok_or_else(|| DomainError::Config {
        message: format!("{} token lifetime out of range: {}", kind, seconds),
    })
}
