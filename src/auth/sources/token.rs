//! Unsigned-request protocol: `?token=<login>:<signature>`

use super::CredentialSource;
use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::StatusCode;

/// Reads the credential from a query parameter
///
/// The signature covers the login alone, so a captured token grants whatever
/// that login may do on any request. Only meant for clients that cannot sign.
#[derive(Debug, Clone)]
pub struct NonSecureAuthProtocol {
    parameter: String,
}

impl NonSecureAuthProtocol {
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

impl CredentialSource for NonSecureAuthProtocol {
    fn name(&self) -> &'static str {
        "non-secure"
    }

    fn extract(&self, request: &AuthRequest) -> Result<Option<Credential>> {
        let Some(token) = request.query_param(&self.parameter) else {
            return Ok(None);
        };

        let mut parts = token.split(':');
        let (Some(login), Some(signature), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(GatewayError::malformed(
                StatusCode::UNAUTHORIZED,
                "Incorrect non-secure authentication",
            ));
        };

        Ok(Some(Credential {
            login: Some(login.to_string()),
            signature: Some(signature.to_string()),
            message: Some(login.to_string()),
            secure: false,
            ..Default::default()
        }))
    }
}
