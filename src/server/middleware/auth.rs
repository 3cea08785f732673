//! Authentication middleware

use crate::auth::{AaaPlugin, Access, AuthRequest, AuthenticatedLogin};
use crate::server::middleware::helpers::{filter_response, insert_auth_time, is_public_path};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

/// Auth middleware for Actix-web
#[derive(Clone)]
pub struct AuthMiddleware {
    plugin: Arc<AaaPlugin>,
    public_paths: Rc<Vec<String>>,
}

impl AuthMiddleware {
    /// Protect every path except those starting with one of `public_paths`
    pub fn new(plugin: Arc<AaaPlugin>, public_paths: Vec<String>) -> Self {
        Self {
            plugin,
            public_paths: Rc::new(public_paths),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            plugin: Arc::clone(&self.plugin),
            public_paths: Rc::clone(&self.public_paths),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    plugin: Arc<AaaPlugin>,
    public_paths: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public_path(&self.public_paths, req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_boxed_body()) });
        }

        let service = Rc::clone(&self.service);
        let plugin = Arc::clone(&self.plugin);

        Box::pin(async move {
            let request = AuthRequest::from_http_request(req.request());
            let verdict = match plugin.check(&request).await {
                Ok(verdict) => verdict,
                Err(e) => return Ok(req.error_response(e)),
            };

            req.extensions_mut()
                .insert(AuthenticatedLogin(verdict.login.clone()));

            let mut response = match verdict.access {
                Access::NonAuthoritative(paths) => {
                    req.into_response(HttpResponse::NonAuthoritativeInformation().json(paths))
                }
                Access::Granted => service.call(req).await?.map_into_boxed_body(),
                Access::Filtered(filter) => filter_response(service.call(req).await?, &filter).await?,
            };

            if plugin.is_timed() {
                insert_auth_time(&mut response, verdict.auth_time);
            }
            Ok(response)
        })
    }
}

/// Login of the authenticated caller, `None` for anonymous requests or when
/// the request did not go through [`AuthMiddleware`]
pub fn get_authenticated_login(req: &HttpRequest) -> Option<String> {
    req.extensions()
        .get::<AuthenticatedLogin>()
        .and_then(|login| login.0.clone())
}
