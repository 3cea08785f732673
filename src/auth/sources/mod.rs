//! Credential sources
//!
//! A source looks for its protocol in the request. It returns `Ok(None)` when
//! the request does not use it, so the next source can try, and fails only
//! when the request unambiguously uses its protocol but cannot be decoded.

mod anonymous;
mod jwt;
mod secure;
mod token;

pub use anonymous::AnonymousSource;
pub use jwt::JsonWebTokenSource;
pub use secure::SecureAuthProtocol;
pub use token::NonSecureAuthProtocol;

use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::utils::error::Result;

/// Extracts a [`Credential`] from a request
#[cfg_attr(test, mockall::automock)]
pub trait CredentialSource: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    fn extract(&self, request: &AuthRequest) -> Result<Option<Credential>>;
}
