//! Token pair and the persisted token subset of a user record.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime (24 hours)
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Refresh token lifetime (168 hours)
pub const REFRESH_TOKEN_EXPIRY_HOURS: i64 = 168;

/// Access and refresh token issued together by one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry (Unix seconds)
    pub access_expires_at: i64,
    /// Refresh token expiry (Unix seconds)
    pub refresh_expires_at: i64,
}

/// Token-related subset of a user's persisted record
///
/// Overwritten on every login; no history is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTokenRecord {
    pub user_id: String,
    pub token: String,
    pub refresh_token: String,
    pub updated_at: DateTime<Utc>,
}

impl UserTokenRecord {
    /// Builds the record written by an upsert
    ///
    /// `updated_at` is truncated to whole seconds, matching the RFC 3339
    /// precision the store has always held.
    pub fn new(
        user_id: impl Into<String>,
        token: impl Into<String>,
        refresh_token: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
            refresh_token: refresh_token.into(),
            updated_at: updated_at.trunc_subsecs(0),
        }
    }
}
