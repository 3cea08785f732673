use super::{AuthProvider, Decision, Denial};
use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::config::AutonomousConfig;
use crate::utils::auth::verify_hmac_signature;
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Trusts one login whose requests are signed with a shared secret
///
/// Lets the service run without a central authority, or keep working when
/// it is unreachable.
#[derive(Clone)]
pub struct AutonomousAuthProvider {
    login: String,
    password: String,
}

impl AutonomousAuthProvider {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AutonomousConfig) -> Self {
        Self::new(config.login.as_str(), config.password.as_str())
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}

impl std::fmt::Debug for AutonomousAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutonomousAuthProvider")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthProvider for AutonomousAuthProvider {
    fn name(&self) -> &'static str {
        "autonomous"
    }

    async fn authorize(
        &self,
        _request: &AuthRequest,
        credential: &Credential,
    ) -> Result<Decision> {
        if credential.login.as_deref() != Some(self.login.as_str()) {
            return Ok(Decision::Defer);
        }

        let (Some(message), Some(signature)) = (&credential.message, &credential.signature)
        else {
            return Ok(Decision::Deny(Denial::Refused));
        };

        if verify_hmac_signature(self.password.as_bytes(), message.as_bytes(), signature)? {
            Ok(Decision::Grant)
        } else {
            debug!("Bad signature for {}", self.login);
            Ok(Decision::Deny(Denial::Refused))
        }
    }
}
