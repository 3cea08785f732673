//! Wildcard permissions and response filtering
//!
//! A [`Permission`] grants a set of methods on the paths of the hosts matching
//! its patterns. The central authority answers with a list of them, which
//! becomes a [`PermissionFilter`] narrowing collection listings to what the
//! caller is allowed to see.

mod filter;
mod types;


pub use filter::PermissionFilter;
pub use types::{Methods, Pattern, Permission, PermissionSet};
