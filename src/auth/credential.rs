//! Normalized output of credential extraction

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Wire names owned by the typed fields; never carried in `extra`
pub const RESERVED_KEYS: [&str; 10] = [
    "login",
    "signature",
    "msg",
    "method",
    "path",
    "host",
    "nonce",
    "timestamp",
    "is_secure",
    "secure",
];

/// The signed identity extracted from a request by exactly one source
///
/// The serialized form is what the central authority receives; `message` and
/// `secure` keep the wire names `msg` and `is_secure`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credential {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// The exact bytes covered by the signature
    #[serde(rename = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(rename = "is_secure")]
    pub secure: bool,
    /// Other signed key/value pairs
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Credential {
    /// The payload posted to the central authority for this service
    pub fn for_service(&self, service: &str) -> Self {
        Self {
            host: Some(service.to_string()),
            ..self.clone()
        }
    }
}
