//! Authorization providers
//!
//! Each provider looks at the request and the extracted credential and either
//! decides or defers to the next one. The first decision ends the chain.

mod autonomous;
mod central;
mod global;
mod host;
mod request;

pub use autonomous::AutonomousAuthProvider;
pub use central::CentralAuthProvider;
pub use global::GlobalPermissions;
pub use host::HostChecker;
pub use request::RequestParameterChecker;

use crate::auth::credential::Credential;
use crate::auth::permissions::PermissionFilter;
use crate::auth::request::AuthRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Why a provider refused a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The signed values do not describe the request being made
    Mismatch(String),
    /// The identity is not allowed to do this
    Refused,
}

/// Outcome of one provider
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Grant,
    Deny(Denial),
    /// Not this provider's call
    Defer,
    /// Grant, and narrow the listing to what the filter allows
    GrantWithFilter(PermissionFilter),
    /// Only these paths could be resolved; answered with a 203
    NonAuthoritative(Vec<String>),
}

impl Decision {
    pub fn mismatch(reason: impl Into<String>) -> Self {
        Self::Deny(Denial::Mismatch(reason.into()))
    }

    pub fn is_defer(&self) -> bool {
        matches!(self, Self::Defer)
    }
}

/// Decides whether a credential may perform a request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    async fn authorize(&self, request: &AuthRequest, credential: &Credential)
    -> Result<Decision>;
}
