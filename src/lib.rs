//! # AAA gateway
//!
//! Authentication, authorization and accounting for REST services exposing
//! system-administration resources.
//!
//! Every request goes through an ordered chain of credential sources (signed
//! `Authorization` header, query token, compact signed claims, anonymous),
//! then an ordered chain of providers deciding whether the caller may do what
//! they ask (request consistency, host allow-list, global permissions, a
//! locally trusted login, a central authority). Listings can be narrowed to
//! the paths the caller may see.
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use aaa_gateway::{Config, HttpServer};
//! use actix_web::{HttpResponse, web};
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let server = HttpServer::new(&config)?;
//!     server
//!         .start_with(|cfg: &mut web::ServiceConfig| {
//!             cfg.route("/hosts/", web::get().to(HttpResponse::Ok));
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{AaaPlugin, AuthOutcome, AuthRequest, Credential, Decision, PermissionFilter};
pub use config::Config;
pub use server::{AuthMiddleware, HttpServer};
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
