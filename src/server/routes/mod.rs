//! Routes served by the gateway itself

pub mod health;

use actix_web::web;

/// Path of the health check, public by default
pub const HEALTH_PATH: &str = "/_health";

/// Configure the gateway's own routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(HEALTH_PATH, web::get().to(health::health_check));
}
