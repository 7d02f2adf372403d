//! Access/refresh token generation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::{
    Claims, TokenClaims, TokenPair, UserIdentity, ACCESS_TOKEN_EXPIRY_HOURS,
    REFRESH_TOKEN_EXPIRY_HOURS,
};
use crate::domain::value_objects::SigningSecret;
use crate::errors::SigningError;

use super::config::TokenServiceConfig;

/// Signs access and refresh tokens with the shared secret
///
/// The refresh token deliberately carries only `exp`: it proves recent
/// authentication, not identity.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    secret: SigningSecret,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl TokenGenerator {
    /// Creates a generator with the default 24h / 168h lifetimes
    pub fn new(secret: SigningSecret) -> Self {
        Self {
            secret,
            access_token_ttl: Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS),
            refresh_token_ttl: Duration::hours(REFRESH_TOKEN_EXPIRY_HOURS),
        }
    }

    pub fn from_config(config: &TokenServiceConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            access_token_ttl: config.access_token_ttl,
            refresh_token_ttl: config.refresh_token_ttl,
        }
    }

    /// Generates a new token pair for a user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens signed
    /// * `Err(SigningError)` - Signing failed; no partial pair is returned
    pub fn generate(&self, identity: &UserIdentity) -> Result<TokenPair, SigningError> {
        self.generate_at(identity, Utc::now())
    }

    /// Generates a token pair as if the current time were `now`
    pub fn generate_at(
        &self,
        identity: &UserIdentity,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, SigningError> {
        let access_claims = Claims::for_access(identity, expiry(now, self.access_token_ttl)?);
        let refresh_claims = Claims::for_refresh(expiry(now, self.refresh_token_ttl)?);

        let access_token = self.sign(&access_claims)?;
        let refresh_token = self.sign(&refresh_claims)?;

        tracing::debug!(
            uid = %identity.uid,
            access_expires_at = access_claims.expires_at,
            refresh_expires_at = refresh_claims.expires_at,
            "Issued token pair"
        );

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_claims.expires_at,
            refresh_expires_at: refresh_claims.expires_at,
        })
    }

    /// Encodes claims into an HS256 JWT
    pub fn sign<C: TokenClaims>(&self, claims: &C) -> Result<String, SigningError> {
        if self.secret.is_empty() {
            tracing::error!("Refusing to sign token with an empty secret");
            return Err(SigningError::UnusableSecret);
        }
        if claims.expires_at() <= 0 {
            return Err(SigningError::Encoding {
                message: "expiry claim must be set".to_string(),
            });
        }

        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &EncodingKey::from_secret(self.secret.as_bytes())).map_err(|e| {
            tracing::error!(error = %e, "Token encoding failed");
            SigningError::Encoding {
                message: e.to_string(),
            }
        })
    }
}

fn expiry(now: DateTime<Utc>, ttl: Duration) -> Result<i64, SigningError> {
    now.checked_add_signed(ttl)
        .map(|at| at.timestamp())
        .ok_or_else(|| SigningError::Encoding {
            message: "token expiry out of range".to_string(),
        })
}
