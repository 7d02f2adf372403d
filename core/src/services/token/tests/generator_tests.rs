//! Unit tests for token generation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode_header, Algorithm};

use super::{fixed_now, identity, secret};
use crate::domain::entities::{Claims, UserIdentity};
use crate::domain::value_objects::SigningSecret;
use crate::errors::SigningError;
use crate::services::token::{TokenGenerator, TokenServiceConfig, TokenValidator};

#[test]
fn test_generate_produces_two_compact_hs256_tokens() {
    let generator = TokenGenerator::new(secret());

    let pair = generator.generate(&identity()).unwrap();

    for token in [&pair.access_token, &pair.refresh_token] {
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(decode_header(token).unwrap().alg, Algorithm::HS256);
    }
    assert_ne!(pair.access_token, pair.refresh_token);
}

#[test]
fn test_generate_applies_default_lifetimes() {
    let generator = TokenGenerator::new(secret());
    let now = fixed_now();

    let pair = generator.generate_at(&identity(), now).unwrap();

    assert_eq!(pair.access_expires_at, (now + Duration::hours(24)).timestamp());
    assert_eq!(pair.refresh_expires_at, (now + Duration::hours(168)).timestamp());
}

#[test]
fn test_access_token_round_trips_identity() {
    let generator = TokenGenerator::new(secret());
    let validator = TokenValidator::new(secret());
    let now = fixed_now();

    let pair = generator.generate_at(&identity(), now).unwrap();
    let claims = validator.validate_at(&pair.access_token, now).unwrap();

    assert_eq!(claims, Claims::for_access(&identity(), pair.access_expires_at));
}

#[test]
fn test_refresh_token_carries_only_expiry() {
    let generator = TokenGenerator::new(secret());
    let validator = TokenValidator::new(secret());
    let now = fixed_now();

    let pair = generator.generate_at(&identity(), now).unwrap();
    let claims = validator.validate_at(&pair.refresh_token, now).unwrap();

    assert!(claims.is_refresh_only());
    assert!(claims.uid.is_empty());
    assert!(claims.email.is_empty());
    assert_eq!(claims.expires_at, pair.refresh_expires_at);
}

#[test]
fn test_empty_identity_still_gets_expiry() {
    let generator = TokenGenerator::new(secret());
    let now = fixed_now();

    let pair = generator.generate_at(&UserIdentity::default(), now).unwrap();

    assert!(pair.access_expires_at > now.timestamp());
}

#[test]
fn test_empty_secret_is_a_signing_error() {
    let generator = TokenGenerator::new(SigningSecret::new(""));

    let result = generator.generate(&identity());

    assert_eq!(result, Err(SigningError::UnusableSecret));
}

#[test]
fn test_sign_refuses_claims_without_expiry() {
    let generator = TokenGenerator::new(secret());

    let result = generator.sign(&Claims::for_refresh(0));

    assert!(matches!(result, Err(SigningError::Encoding { .. })));
}

#[test]
fn test_expiry_past_the_calendar_is_a_signing_error() {
    let generator = TokenGenerator::new(secret());

    let result = generator.generate_at(&identity(), DateTime::<Utc>::MAX_UTC);

    assert!(matches!(result, Err(SigningError::Encoding { .. })));
}

#[test]
fn test_oversized_lifetime_is_a_signing_error() {
    let mut config = TokenServiceConfig::new(secret());
    config.access_token_ttl = Duration::try_days(100_000_000).unwrap();
    let generator = TokenGenerator::from_config(&config);

    let result = generator.generate_at(&identity(), fixed_now());

    assert!(matches!(result, Err(SigningError::Encoding { .. })));
}
