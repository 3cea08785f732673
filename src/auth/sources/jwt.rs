//! Compact signed-claims protocol
//!
//! `Authorization: <b64url(header)>.<b64url(claims)>.<signature>`. Only the
//! signed form (JWS) is supported. The signature is not checked here: the
//! providers verify it against the undecoded `header.claims` message.

use super::CredentialSource;
use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::header::AUTHORIZATION;
use base64::Engine as _;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use tracing::debug;

const SUPPORTED_HEADERS: [&str; 3] = ["alg", "typ", "cty"];

/// base64url, with or without trailing padding
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Default)]
pub struct JsonWebTokenSource;

impl JsonWebTokenSource {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for JsonWebTokenSource {
    fn name(&self) -> &'static str {
        "jwt"
    }

    fn extract(&self, request: &AuthRequest) -> Result<Option<Credential>> {
        let Some(authorization) = request.header(AUTHORIZATION.as_str()) else {
            return Ok(None);
        };
        if authorization.matches('.').count() != 2 {
            return Ok(None);
        }
        let Some((message, signature)) = authorization.rsplit_once('.') else {
            return Ok(None);
        };
        let Some((encoded_header, encoded_claims)) = message.split_once('.') else {
            return Ok(None);
        };

        let (Ok(raw_header), Ok(raw_claims)) = (
            BASE64_URL.decode(encoded_header),
            BASE64_URL.decode(encoded_claims),
        ) else {
            debug!("Authorization header has two dots but is not base64url");
            return Ok(None);
        };
        let Ok(Value::Object(header)) = serde_json::from_slice::<Value>(&raw_header) else {
            return Ok(None);
        };

        let mut unsupported: Vec<&str> = header
            .keys()
            .map(String::as_str)
            .filter(|key| !SUPPORTED_HEADERS.contains(key))
            .collect();
        if !unsupported.is_empty() {
            unsupported.sort_unstable();
            return Err(GatewayError::bad_request(format!(
                "Unsupported JWT headers: {}",
                unsupported.join(",")
            )));
        }

        let nested = header
            .get("cty")
            .and_then(Value::as_str)
            .is_some_and(|cty| cty.eq_ignore_ascii_case("JWT"));
        if nested {
            return Err(GatewayError::bad_request("Nested JWT is not supported"));
        }

        let Ok(Value::Object(mut claims)) = serde_json::from_slice::<Value>(&raw_claims) else {
            return Err(GatewayError::bad_request("Bad JSON values"));
        };

        let subject = take_string(&mut claims, "sub")?;
        let Some((method, path)) = subject.split_once(' ') else {
            return Err(missing("sub"));
        };
        let login = take_string(&mut claims, "iss")?;
        let host = take_string(&mut claims, "aud")?;
        let nonce = take_string(&mut claims, "jti")?;
        let timestamp = claims.remove("exp").ok_or_else(|| missing("exp"))?;

        Ok(Some(Credential {
            login: Some(login),
            signature: Some(signature.to_string()),
            message: Some(message.to_string()),
            method: Some(method.to_string()),
            path: Some(path.to_string()),
            host: Some(host),
            nonce: Some(nonce),
            timestamp: Some(timestamp),
            secure: true,
            ..Default::default()
        }))
    }
}

fn missing(key: &str) -> GatewayError {
    GatewayError::bad_request(format!("Missing/Misformatted key {}", key))
}

fn take_string(claims: &mut Map<String, Value>, key: &str) -> Result<String> {
    match claims.remove(key) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(missing(key)),
    }
}
