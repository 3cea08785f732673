//! Authentication configuration

use super::*;
use crate::auth::permissions::Permission;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of this service, sent to the central authority as `host`
    #[serde(default)]
    pub service: String,
    /// Allow-listed request hosts. The host check is enabled when non-empty.
    #[serde(default)]
    pub hosts: Vec<String>,
    /// Report the authentication time in the `x-auth-time` header
    #[serde(default = "default_true")]
    pub timed: bool,
    /// Enabled credential protocols
    #[serde(default)]
    pub protocols: ProtocolsConfig,
    /// Query parameter carrying the non-secure token
    #[serde(default = "default_token_parameter", alias = "get_parameter")]
    pub token_parameter: String,
    /// Local shared-secret authentication
    #[serde(default)]
    pub autonomous: Option<AutonomousConfig>,
    /// Delegation to a central authority
    #[serde(default)]
    pub central: Option<CentralConfig>,
    /// Permissions granted to every caller
    #[serde(default)]
    pub global_permissions: Vec<Permission>,
    /// Path prefixes served without authentication
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            service: String::new(),
            hosts: Vec::new(),
            timed: true,
            protocols: ProtocolsConfig::default(),
            token_parameter: default_token_parameter(),
            autonomous: None,
            central: None,
            global_permissions: Vec::new(),
            public_paths: default_public_paths(),
        }
    }
}

impl AuthConfig {
    /// Whether any configured provider is able to grant a request
    pub fn can_grant(&self) -> bool {
        self.autonomous.is_some() || self.central.is_some() || !self.global_permissions.is_empty()
    }
}

/// Credential protocols accepted by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolsConfig {
    /// Signed `Authorization` header
    #[serde(default = "default_true")]
    pub secure: bool,
    /// `login:signature` query parameter
    #[serde(default)]
    pub non_secure: bool,
    /// Compact signed claims in the `Authorization` header
    #[serde(default)]
    pub jwt: bool,
    /// Accept unsigned requests, to be granted by global permissions
    #[serde(default)]
    pub anonymous: bool,
}

impl Default for ProtocolsConfig {
    fn default() -> Self {
        Self {
            secure: true,
            non_secure: false,
            jwt: false,
            anonymous: false,
        }
    }
}

impl ProtocolsConfig {
    /// Whether at least one protocol is enabled
    pub fn any_enabled(&self) -> bool {
        self.secure || self.non_secure || self.jwt || self.anonymous
    }
}

/// Local shared-secret authentication
#[derive(Clone, Serialize, Deserialize)]
pub struct AutonomousConfig {
    /// Login trusted for every operation
    #[serde(default = "default_autonomous_login")]
    pub login: String,
    /// Shared secret
    pub password: String,
}

impl std::fmt::Debug for AutonomousConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutonomousConfig")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Central authority configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralConfig {
    /// Authorization endpoint
    #[serde(alias = "auth_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_central_timeout")]
    pub timeout: u64,
}

/// Log configurations that are valid but probably not intended
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.hosts.is_empty() {
        warn!("No host settings, every host is allowed");
    }

    if config.protocols.non_secure {
        warn!("Non-secure token authentication is enabled, signatures travel in the query string");
    }

    if !config.can_grant() {
        warn!("No authentication provider can grant access, every request will be rejected");
    }
}
