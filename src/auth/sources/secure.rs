//! Signed `Authorization` header protocol
//!
//! `Authorization: <urlencoded key/values>:<hex signature>`. The signature
//! covers everything before the last colon.

use super::CredentialSource;
use crate::auth::credential::{Credential, RESERVED_KEYS};
use crate::auth::request::AuthRequest;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use std::collections::BTreeMap;

const MANDATORY_KEYS: [&str; 3] = ["host", "method", "path"];

#[derive(Debug, Clone, Default)]
pub struct SecureAuthProtocol;

impl SecureAuthProtocol {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for SecureAuthProtocol {
    fn name(&self) -> &'static str {
        "secure"
    }

    fn extract(&self, request: &AuthRequest) -> Result<Option<Credential>> {
        let Some(authorization) = request.header(AUTHORIZATION.as_str()) else {
            return Ok(None);
        };
        let Some((message, signature)) = authorization.rsplit_once(':') else {
            return Ok(None);
        };

        let mut content: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in url::form_urlencoded::parse(message.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            content
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        let missing: Vec<&str> = MANDATORY_KEYS
            .iter()
            .copied()
            .filter(|key| !content.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(GatewayError::malformed(
                StatusCode::FORBIDDEN,
                format!("Missing authentication data: {}", missing.join(", ")),
            ));
        }

        let login = content.remove("login");
        let method = content.remove("method");
        let path = content.remove("path");
        let host = content.remove("host");
        let nonce = content.remove("nonce");
        let timestamp = content.remove("timestamp").map(serde_json::Value::String);
        content.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Ok(Some(Credential {
            login,
            signature: Some(signature.to_string()),
            message: Some(message.to_string()),
            method,
            path,
            host,
            nonce,
            timestamp,
            secure: true,
            extra: content,
        }))
    }
}
