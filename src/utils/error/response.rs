//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Machine readable code and status for this error
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            GatewayError::Yaml(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZATION_ERROR")
            }
            GatewayError::MissingCredential(_) => (StatusCode::UNAUTHORIZED, "MISSING_CREDENTIAL"),
            GatewayError::MalformedCredential { status, .. } => (*status, "MALFORMED_CREDENTIAL"),
            GatewayError::PolicyMismatch(_) => (StatusCode::FORBIDDEN, "POLICY_MISMATCH"),
            GatewayError::ExplicitDenial(_) => (StatusCode::FORBIDDEN, "ACCESS_DENIED"),
            GatewayError::DecisionExhausted(_) => (StatusCode::FORBIDDEN, "NO_DECISION"),
            GatewayError::UpstreamUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "AUTH_SERVER_UNAVAILABLE")
            }
            GatewayError::UpstreamTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "AUTH_SERVER_TIMEOUT"),
            GatewayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Whether this error is a rejection issued by the authentication pipeline
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GatewayError::MissingCredential(_)
                | GatewayError::MalformedCredential { .. }
                | GatewayError::PolicyMismatch(_)
                | GatewayError::ExplicitDenial(_)
                | GatewayError::DecisionExhausted(_)
                | GatewayError::UpstreamUnavailable(_)
                | GatewayError::UpstreamTimeout(_)
        )
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.classify();

        // Do not leak the details of internal failures
        let message = match self {
            GatewayError::Io(_) | GatewayError::Serialization(_) | GatewayError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
