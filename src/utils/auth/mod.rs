//! Authentication utilities
//!
//! Signing primitives shared by the authentication providers.

pub mod crypto;

pub use crypto::{create_hmac_signature, verify_hmac_signature};
