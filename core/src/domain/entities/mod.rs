//! Domain entities for the token lifecycle.

pub mod claims;
pub mod token;


// Re-export commonly used types
pub use claims::{Claims, TokenClaims, UserIdentity};
pub use token::{
    TokenPair, UserTokenRecord, ACCESS_TOKEN_EXPIRY_HOURS, REFRESH_TOKEN_EXPIRY_HOURS,
};
