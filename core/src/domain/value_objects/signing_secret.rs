//! Shared HMAC secret.

use std::fmt;
use std::sync::Arc;

/// Immutable signing secret shared by the generator and the validator
///
/// Cloning is cheap; the bytes are never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Arc<[u8]>);

impl SigningSecret {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self(Arc::from(secret.as_ref()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

impl From<&str> for SigningSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for SigningSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let secret = SigningSecret::from("hunter2");
        assert_eq!(format!("{:?}", secret), "SigningSecret(<redacted>)");
    }

    #[test]
    fn test_clones_share_bytes() {
        let secret = SigningSecret::from("shared".to_string());
        let clone = secret.clone();
        assert_eq!(clone.as_bytes(), b"shared");
        assert_eq!(secret, clone);
        assert!(!secret.is_empty());
        assert!(SigningSecret::new("").is_empty());
    }
}
