use super::{AuthProvider, Decision};
use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Rejects credentials signed for another host, or for a host this service
/// does not answer to
#[derive(Debug, Clone)]
pub struct HostChecker {
    hosts: Vec<String>,
}

impl HostChecker {
    pub fn new(hosts: Vec<String>) -> Self {
        Self { hosts }
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}

#[async_trait]
impl AuthProvider for HostChecker {
    fn name(&self) -> &'static str {
        "host"
    }

    async fn authorize(
        &self,
        request: &AuthRequest,
        credential: &Credential,
    ) -> Result<Decision> {
        let Some(host) = credential.host.as_deref() else {
            return Ok(Decision::Defer);
        };

        if request.host() != Some(host) {
            return Ok(Decision::mismatch(
                "Bad authentication data host does not match",
            ));
        }

        if !self.hosts.iter().any(|allowed| allowed == host) {
            debug!("Host {} is not one of {:?}", host, self.hosts);
            return Ok(Decision::mismatch("Bad host"));
        }

        Ok(Decision::Defer)
    }
}
