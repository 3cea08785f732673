//! Delegation to a central authorization authority

use super::{AuthProvider, Decision, Denial};
use crate::auth::credential::Credential;
use crate::auth::permissions::{Permission, PermissionFilter};
use crate::auth::request::AuthRequest;
use crate::config::CentralConfig;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Asks the central authority about every credential it is given
///
/// Never defers: when the authority cannot answer, the request fails.
#[derive(Debug, Clone)]
pub struct CentralAuthProvider {
    client: Client,
    url: String,
    service: String,
}

impl CentralAuthProvider {
    pub fn new(
        url: impl Into<String>,
        service: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            service: service.into(),
        })
    }

    pub fn from_config(config: &CentralConfig, service: &str) -> Result<Self> {
        Self::new(
            config.url.as_str(),
            service,
            Duration::from_secs(config.timeout),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post the credential, returning the status and the JSON body if any
    async fn ask(&self, credential: &Credential) -> Result<(u16, Option<Value>)> {
        let payload = credential.for_service(&self.service);
        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("application/json"));

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        if !is_json || body.is_empty() {
            return Ok((status, None));
        }

        let value = serde_json::from_slice(&body).map_err(|e| {
            error!("Auth server {} sent invalid JSON: {}", self.url, e);
            GatewayError::unavailable("Auth server responded invalid JSON")
        })?;
        Ok((status, Some(value)))
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            error!("Auth server {} timed out", self.url);
            GatewayError::timeout("Auth server timeout")
        } else {
            error!("Auth server {} did not respond: {}", self.url, e);
            GatewayError::unavailable("Auth server did not respond")
        }
    }

    fn permissions(body: Value) -> Result<Vec<Permission>> {
        serde_json::from_value(body).map_err(|e| {
            error!("Auth server sent invalid permissions: {}", e);
            GatewayError::unavailable("Auth server responded invalid permissions")
        })
    }
}

#[async_trait]
impl AuthProvider for CentralAuthProvider {
    fn name(&self) -> &'static str {
        "central"
    }

    async fn authorize(
        &self,
        request: &AuthRequest,
        credential: &Credential,
    ) -> Result<Decision> {
        let (status, body) = self.ask(credential).await?;
        let listing = request.is_collection_listing();
        debug!("Auth server answered {} for {}", status, request.path());

        match status {
            200 => match body {
                Some(body) if listing => Ok(Decision::GrantWithFilter(
                    PermissionFilter::for_service(&self.service, Self::permissions(body)?),
                )),
                _ => Ok(Decision::Grant),
            },
            403 => {
                let Some(body) = body.filter(|_| listing) else {
                    return Ok(Decision::Deny(Denial::Refused));
                };
                let permissions = Self::permissions(body)?;

                let resolved = !permissions.is_empty()
                    && permissions.iter().all(|p| !p.path().has_wildcard());
                if resolved {
                    Ok(Decision::NonAuthoritative(
                        permissions
                            .iter()
                            .map(|p| p.path().as_str().to_string())
                            .collect(),
                    ))
                } else {
                    Ok(Decision::GrantWithFilter(PermissionFilter::for_service(
                        &self.service,
                        permissions,
                    )))
                }
            }
            code => {
                error!("Auth server {} responded {}", self.url, code);
                Err(GatewayError::unavailable(format!(
                    "Auth server responded unexpected {} code",
                    code
                )))
            }
        }
    }
}
