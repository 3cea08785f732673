//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::auth::AaaPlugin;
use crate::config::{Config, ServerConfig};
use crate::server::middleware::AuthMiddleware;
use crate::server::routes;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Authentication pipeline shared by every worker
    plugin: Arc<AaaPlugin>,
    /// Paths served without authentication
    public_paths: Vec<String>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let plugin = AaaPlugin::from_config(config.auth())?;

        Ok(Self {
            config: config.server().clone(),
            plugin: Arc::new(plugin),
            public_paths: config.auth().public_paths.clone(),
        })
    }

    /// Create the Actix-web application
    ///
    /// `configure` mounts the protected resources.
    pub fn create_app<F>(
        plugin: Arc<AaaPlugin>,
        public_paths: Vec<String>,
        configure: F,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    >
    where
        F: FnOnce(&mut web::ServiceConfig),
    {
        App::new()
            .wrap(AuthMiddleware::new(plugin, public_paths))
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
            .configure(configure)
    }

    /// Start the HTTP server with only the gateway's own routes
    pub async fn start(self) -> Result<()> {
        self.start_with(|_| {}).await
    }

    /// Start the HTTP server, mounting resources with `configure`
    pub async fn start_with<F>(self, configure: F) -> Result<()>
    where
        F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
    {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let plugin = self.plugin;
        let public_paths = self.public_paths;
        let mut server = ActixHttpServer::new(move || {
            Self::create_app(Arc::clone(&plugin), public_paths.clone(), configure.clone())
        });
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| GatewayError::internal(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the authentication pipeline
    pub fn plugin(&self) -> &Arc<AaaPlugin> {
        &self.plugin
    }
}
