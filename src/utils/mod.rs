//! Utility modules for the gateway
//!
//! - **auth**: Request signing primitives
//! - **error**: Error taxonomy and HTTP mapping
//! - **logging**: Tracing subscriber setup

pub mod auth;
pub mod error;
pub mod logging;
