//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod gateway;
pub mod logging;
pub mod server;

// Re-export all configuration types
pub use auth::*;
pub use gateway::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8002
}

pub fn default_true() -> bool {
    true
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_token_parameter() -> String {
    "token".to_string()
}

pub fn default_autonomous_login() -> String {
    "local_master".to_string()
}

/// Default central authority timeout in seconds
pub fn default_central_timeout() -> u64 {
    5
}

pub fn default_public_paths() -> Vec<String> {
    vec!["/_health".to_string()]
}
