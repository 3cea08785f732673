//! HTTP server implementation
//!
//! This module provides the HTTP server and the authentication middleware.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;


pub use builder::{ServerBuilder, run_server};
pub use middleware::AuthMiddleware;
pub use server::HttpServer;
