//! Error handling for the gateway
//!
//! This module defines the error taxonomy of the AAA pipeline and its mapping
//! onto HTTP responses.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
