//! Authentication configuration validators
//!
//! This module provides validation implementations for AuthConfig and its
//! provider sections.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if !self.protocols.any_enabled() {
            return Err("At least one authentication protocol must be enabled".to_string());
        }

        if self.protocols.non_secure && self.token_parameter.is_empty() {
            return Err(
                "Token parameter name cannot be empty when non-secure auth is enabled".to_string(),
            );
        }

        if self.hosts.iter().any(|host| host.is_empty()) {
            return Err("Allowed hosts cannot contain an empty host".to_string());
        }

        if let Some(autonomous) = &self.autonomous {
            autonomous.validate()?;
        }

        if let Some(central) = &self.central {
            if self.service.is_empty() {
                return Err(
                    "Service name is required when central authentication is enabled".to_string(),
                );
            }
            central.validate()?;
        }

        Ok(())
    }
}

impl Validate for AutonomousConfig {
    fn validate(&self) -> Result<(), String> {
        if self.login.is_empty() {
            return Err("Autonomous login cannot be empty".to_string());
        }

        if self.password.is_empty() {
            return Err("Autonomous password cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for CentralConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.url)
            .map_err(|e| format!("Central auth URL is invalid: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Central auth URL must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("Central auth URL must have a valid host".to_string());
        }

        if self.timeout == 0 {
            return Err("Central auth timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
