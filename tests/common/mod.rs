//! Common test utilities for aaa-gateway
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{SERVICE, secure_authorization};
//!
//! let header = secure_authorization("local_master", "s3cret", "GET", "/hosts/");
//! ```

pub mod assertions;
pub mod fixtures;

pub use fixtures::{AuthConfigFactory, SERVICE};
