//! Authentication, authorization and accounting pipeline
//!
//! Requests go through an ordered chain of credential [`sources`], then an
//! ordered chain of [`providers`], both driven by [`AaaPlugin`].

pub mod credential;
pub mod permissions;
pub mod plugin;
pub mod providers;
pub mod request;
pub mod sources;

pub use credential::Credential;
pub use permissions::{Permission, PermissionFilter, PermissionSet};
pub use plugin::{AaaPlugin, Access, AuthOutcome, AuthenticatedLogin, Verdict};
pub use providers::{AuthProvider, Decision, Denial};
pub use request::AuthRequest;
pub use sources::CredentialSource;
