//! Helper functions for creating specific error types

use super::types::GatewayError;
use actix_web::http::StatusCode;

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn missing_credential<S: Into<String>>(message: S) -> Self {
        Self::MissingCredential(message.into())
    }

    pub fn malformed<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self::MalformedCredential {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::malformed(StatusCode::BAD_REQUEST, message)
    }

    pub fn mismatch<S: Into<String>>(message: S) -> Self {
        Self::PolicyMismatch(message.into())
    }

    pub fn denied<S: Into<String>>(message: S) -> Self {
        Self::ExplicitDenial(message.into())
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::UpstreamUnavailable(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::UpstreamTimeout(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}
