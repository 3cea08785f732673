//! Core error type definitions

use actix_web::http::StatusCode;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
///
/// Rejections of the authentication pipeline are variants of this enum; the
/// non-authoritative outcome is deliberately not, see
/// [`crate::auth::Decision::NonAuthoritative`].
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No source recognized a credential in the request
    #[error("{0}")]
    MissingCredential(String),

    /// A source recognized its protocol but could not decode it
    #[error("{message}")]
    MalformedCredential { status: StatusCode, message: String },

    /// Signed values do not match the request actually being made
    #[error("{0}")]
    PolicyMismatch(String),

    /// A provider refused the request
    #[error("{0}")]
    ExplicitDenial(String),

    /// Every provider deferred
    #[error("{0}")]
    DecisionExhausted(String),

    /// The central authority could not be reached or misbehaved
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// The central authority did not answer in time
    #[error("{0}")]
    UpstreamTimeout(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
