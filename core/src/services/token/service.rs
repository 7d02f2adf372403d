//! Token service composing generation, persistence and validation

use std::sync::Arc;

use crate::domain::entities::{Claims, TokenPair, UserIdentity};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::UserTokenStore;

use super::config::TokenServiceConfig;
use super::generator::TokenGenerator;
use super::persister::TokenPersister;
use super::validator::TokenValidator;

/// Entry point for the login and request-authentication flows
///
/// The generator and validator share only the secret and the claims shape.
pub struct TokenService<S: UserTokenStore + ?Sized> {
    generator: TokenGenerator,
    validator: TokenValidator,
    persister: TokenPersister<S>,
}

impl<S: UserTokenStore + ?Sized> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Shared handle to the user record store
    /// * `config` - Token service configuration
    pub fn new(store: Arc<S>, config: TokenServiceConfig) -> Self {
        Self {
            generator: TokenGenerator::from_config(&config),
            validator: TokenValidator::new(config.secret.clone()),
            persister: TokenPersister::with_timeout(store, config.persist_timeout),
        }
    }

    pub fn generator(&self) -> &TokenGenerator {
        &self.generator
    }

    pub fn validator(&self) -> &TokenValidator {
        &self.validator
    }

    pub fn persister(&self) -> &TokenPersister<S> {
        &self.persister
    }

    /// Issues a token pair for a freshly authenticated user and records it
    ///
    /// Tokens are not returned unless they were persisted.
    pub async fn issue_tokens(&self, identity: &UserIdentity) -> DomainResult<TokenPair> {
        let pair = self.generator.generate(identity)?;
        self.persister
            .persist(&pair.access_token, &pair.refresh_token, &identity.uid)
            .await?;
        Ok(pair)
    }

    /// Verifies a presented access token
    pub fn validate(&self, token: &str) -> DomainResult<Claims> {
        Ok(self.validator.validate(token)?)
    }

    /// Exchanges a valid refresh token for a new, persisted pair
    ///
    /// The refresh token binds no identity, so the caller supplies the user it
    /// has re-loaded. No replay detection is performed.
    pub async fn refresh_tokens(
        &self,
        refresh_token: &str,
        identity: &UserIdentity,
    ) -> DomainResult<TokenPair> {
        let claims = self.validator.validate(refresh_token)?;
        if !claims.is_refresh_only() {
            return Err(ValidationError::malformed("not a refresh token").into());
        }
        self.issue_tokens(identity).await
    }
}
