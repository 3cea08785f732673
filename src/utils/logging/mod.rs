//! Logging setup
//!
//! The gateway logs through `tracing`; this module installs the global
//! subscriber from the logging configuration.

use crate::config::LoggingConfig;
use crate::utils::error::{GatewayError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter, `RUST_LOG` taking precedence over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| GatewayError::Config(format!("Invalid log level: {}", e))),
    }
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| GatewayError::Config(format!("Failed to initialize logging: {}", e)))
}
