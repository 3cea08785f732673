//! Catch-all source for unauthenticated access

use super::CredentialSource;
use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::utils::error::Result;

/// Matches every request with an empty, unsigned credential
///
/// Must be the last source of the chain. Only the global permissions can
/// grant such a credential anything.
#[derive(Debug, Clone, Default)]
pub struct AnonymousSource;

impl AnonymousSource {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for AnonymousSource {
    fn name(&self) -> &'static str {
        "anonymous"
    }

    fn extract(&self, _request: &AuthRequest) -> Result<Option<Credential>> {
        Ok(Some(Credential::default()))
    }
}
