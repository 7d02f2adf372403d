//! Signature and expiry validation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::entities::{Claims, TokenClaims};
use crate::domain::value_objects::SigningSecret;
use crate::errors::ValidationError;

/// Verifies presented tokens against the shared secret
///
/// Validation is single-pass: parse and verify the signature, then check
/// expiry as a separate gate. Claims are only returned on full success.
#[derive(Debug, Clone)]
pub struct TokenValidator {
    secret: SigningSecret,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked after decoding, against an injectable clock.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self { secret, validation }
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and token not expired
    /// * `Err(ValidationError)` - `InvalidSignature`, `MalformedToken` or `Expired`
    pub fn validate(&self, token: &str) -> Result<Claims, ValidationError> {
        self.validate_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, ValidationError> {
        self.decode_at::<Claims>(token, now)
    }

    /// Verifies a token into any claims type
    pub fn decode_at<C: TokenClaims>(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<C, ValidationError> {
        let claims = decode::<C>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &self.validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            let error = classify(&e);
            tracing::warn!(error = %error, "Token rejected");
            error
        })?;

        let expires_at = claims.expires_at();
        if expires_at <= 0 {
            tracing::warn!("Token rejected: expiry claim missing");
            return Err(ValidationError::malformed("expiry claim missing"));
        }
        if expires_at < now.timestamp() {
            tracing::debug!(expired_at = expires_at, "Token rejected: expired");
            return Err(ValidationError::Expired {
                expired_at: expires_at,
            });
        }

        Ok(claims)
    }
}

fn classify(error: &jsonwebtoken::errors::Error) -> ValidationError {
    match error.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            ValidationError::InvalidSignature
        }
        _ => ValidationError::malformed(error.to_string()),
    }
}
