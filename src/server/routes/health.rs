//! Health check endpoint

use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Health status response
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
}

/// Basic health check endpoint
///
/// Used by load balancers, so it is served without authentication.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(health_status))
}
