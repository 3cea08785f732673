use super::{AuthProvider, Decision};
use crate::auth::credential::Credential;
use crate::auth::request::AuthRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Rejects credentials signed for another method or path
///
/// Never grants. Must run first so that a signature captured on one request
/// cannot be replayed on another.
#[derive(Debug, Clone, Default)]
pub struct RequestParameterChecker;

impl RequestParameterChecker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthProvider for RequestParameterChecker {
    fn name(&self) -> &'static str {
        "request-parameters"
    }

    async fn authorize(
        &self,
        request: &AuthRequest,
        credential: &Credential,
    ) -> Result<Decision> {
        if let Some(method) = &credential.method {
            if method != request.method().as_str() {
                return Ok(Decision::mismatch(
                    "Bad authorization data method does not match",
                ));
            }
        }

        if let Some(path) = &credential.path {
            if *path != request.path_with_query() {
                return Ok(Decision::mismatch(
                    "Bad authorization data path does not match",
                ));
            }
        }

        Ok(Decision::Defer)
    }
}
