//! Integration tests for aaa-gateway
//!
//! These tests drive the middleware over actix and check how the pieces
//! work together.

pub mod config_validation_tests;
pub mod middleware_tests;
