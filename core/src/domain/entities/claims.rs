//! Claims embedded in signed tokens.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Payload that can be signed into a token and verified back out of one.
///
/// Every implementor carries the standard `exp` claim; the validator checks it
/// independently of the signature.
pub trait TokenClaims: Serialize + DeserializeOwned {
    /// Expiry as a Unix timestamp in seconds
    fn expires_at(&self) -> i64;
}

/// Identity fields supplied by the login flow when issuing tokens
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Role tag (e.g. `"ADMIN"`, `"USER"`)
    pub user_type: String,
    /// Stable user identifier; also the key of the user record
    pub uid: String,
}

impl UserIdentity {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        user_type: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            user_type: user_type.into(),
            uid: uid.into(),
        }
    }
}

/// JWT payload
///
/// Access tokens carry every field. Refresh tokens carry only `exp`; their
/// identity fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub uid: String,

    #[serde(default)]
    pub user_type: String,

    /// Expiration timestamp
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    /// Creates full claims for an access token
    pub fn for_access(identity: &UserIdentity, expires_at: i64) -> Self {
        Self {
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            uid: identity.uid.clone(),
            user_type: identity.user_type.clone(),
            expires_at,
        }
    }

    /// Creates expiry-only claims for a refresh token
    pub fn for_refresh(expires_at: i64) -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            uid: String::new(),
            user_type: String::new(),
            expires_at,
        }
    }

    /// `true` when no identity field is set
    pub fn is_refresh_only(&self) -> bool {
        self.email.is_empty()
            && self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.uid.is_empty()
            && self.user_type.is_empty()
    }

    /// Checks if the claims have expired at `now`
    ///
    /// A token expiring exactly at `now` is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now.timestamp()
    }

    /// Expiry as a `DateTime`, `None` if the timestamp is out of range
    pub fn expires_at_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }
}

impl TokenClaims for Claims {
    fn expires_at(&self) -> i64 {
        self.expires_at
    }
}
