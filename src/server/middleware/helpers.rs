//! Helper functions for middleware

use crate::auth::PermissionFilter;
use crate::utils::error::GatewayError;
use actix_web::body::{BoxBody, MessageBody, to_bytes};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;

/// Seconds spent deciding, as a float
pub const AUTH_TIME_HEADER: &str = "x-auth-time";

/// Check if a path is served without authentication
///
/// A prefix only matches whole path segments: `/_health` covers
/// `/_health/ready` but not `/_healthz`.
pub fn is_public_path(public_paths: &[String], path: &str) -> bool {
    public_paths.iter().any(|prefix| match path.strip_prefix(prefix.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    })
}

/// Report the authentication time on the response
pub fn insert_auth_time(response: &mut ServiceResponse<BoxBody>, elapsed: Duration) {
    if let Ok(value) = HeaderValue::from_str(&elapsed.as_secs_f64().to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(AUTH_TIME_HEADER), value);
    }
}

/// Narrow a JSON listing to what `filter` allows
///
/// Failed and empty responses are passed through untouched.
pub async fn filter_response<B>(
    response: ServiceResponse<B>,
    filter: &PermissionFilter,
) -> Result<ServiceResponse<BoxBody>, actix_web::Error>
where
    B: MessageBody + 'static,
{
    if !response.status().is_success() {
        return Ok(response.map_into_boxed_body());
    }

    let (req, res) = response.into_parts();
    let (head, body) = res.into_parts();
    let bytes = to_bytes(body)
        .await
        .map_err(|_| GatewayError::internal("Failed to read the response body"))?;
    if bytes.is_empty() {
        return Ok(ServiceResponse::new(req, head.set_body(bytes).map_into_boxed_body()));
    }

    let listing: Value = serde_json::from_slice(&bytes).map_err(GatewayError::from)?;
    let filtered = serde_json::to_vec(&filter.apply(listing)?).map_err(GatewayError::from)?;

    let mut res = head.set_body(filtered).map_into_boxed_body();
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(ServiceResponse::new(req, res))
}
