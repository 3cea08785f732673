//! End-to-end tests
//!
//! A full application built by `HttpServer::create_app` from a YAML
//! configuration, with a resource mounted behind the gateway.

pub mod pipeline;
