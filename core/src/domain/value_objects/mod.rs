//! Value objects shared by the token services.

pub mod signing_secret;

pub use signing_secret::SigningSecret;
