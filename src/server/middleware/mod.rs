//! HTTP middleware
//!
//! [`AuthMiddleware`] runs the authentication pipeline in front of the
//! wrapped service.

mod auth;
mod helpers;


pub use auth::{AuthMiddleware, AuthMiddlewareService, get_authenticated_login};
pub use helpers::{AUTH_TIME_HEADER, filter_response, insert_auth_time, is_public_path};
