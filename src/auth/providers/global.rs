use super::{AuthProvider, Decision};
use crate::auth::credential::Credential;
use crate::auth::permissions::PermissionSet;
use crate::auth::request::AuthRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Grants what every caller is allowed to do, whoever they are
#[derive(Debug, Clone)]
pub struct GlobalPermissions {
    permissions: PermissionSet,
}

impl GlobalPermissions {
    pub fn new(permissions: PermissionSet) -> Self {
        Self { permissions }
    }
}

#[async_trait]
impl AuthProvider for GlobalPermissions {
    fn name(&self) -> &'static str {
        "global-permissions"
    }

    async fn authorize(&self, request: &AuthRequest, _credential: &Credential) -> Result<Decision> {
        let host = request.host().unwrap_or_default();
        if self
            .permissions
            .authorized(host, request.method().as_str(), request.path())
        {
            Ok(Decision::Grant)
        } else {
            Ok(Decision::Defer)
        }
    }
}
