//! The AAA orchestrator
//!
//! Runs the source chain, then the provider chain, and wraps a downstream
//! handler with the resulting decision:
//!
//! 1. the first source that recognizes its protocol yields the credential;
//! 2. the first provider that does not defer decides, and is timed;
//! 3. denials become errors, a non-authoritative answer skips the handler;
//! 4. a filter from the decision narrows the handler's response.


use crate::auth::credential::Credential;
use crate::auth::permissions::{PermissionFilter, PermissionSet};
use crate::auth::providers::{
    AuthProvider, AutonomousAuthProvider, CentralAuthProvider, Decision, Denial,
    GlobalPermissions, HostChecker, RequestParameterChecker,
};
use crate::auth::request::AuthRequest;
use crate::auth::sources::{
    AnonymousSource, CredentialSource, JsonWebTokenSource, NonSecureAuthProtocol,
    SecureAuthProtocol,
};
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};
use actix_web::ResponseError;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Login recorded on the request once a credential is extracted
///
/// `None` for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedLogin(pub Option<String>);

/// What the caller is allowed to get
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Granted,
    /// Granted, the listing must go through the filter
    Filtered(PermissionFilter),
    /// Do not call the handler, answer 203 with these paths
    NonAuthoritative(Vec<String>),
}

/// Result of a successful authentication
#[derive(Debug, Clone)]
pub struct Verdict {
    pub login: Option<String>,
    pub access: Access,
    /// Time spent in the provider chain
    pub auth_time: Duration,
}

/// Result of [`AaaPlugin::authorize`]
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome<T> {
    Responded {
        response: T,
        auth_time: Option<Duration>,
    },
    NonAuthoritative(Vec<String>),
}

/// Ordered chains of sources and providers
#[derive(Clone)]
pub struct AaaPlugin {
    sources: Vec<Arc<dyn CredentialSource>>,
    providers: Vec<Arc<dyn AuthProvider>>,
    timed: bool,
}

impl std::fmt::Debug for AaaPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AaaPlugin")
            .field("sources", &self.source_names())
            .field("providers", &self.provider_names())
            .field("timed", &self.timed)
            .finish()
    }
}

impl AaaPlugin {
    pub fn new(
        sources: Vec<Arc<dyn CredentialSource>>,
        providers: Vec<Arc<dyn AuthProvider>>,
    ) -> Self {
        Self {
            sources,
            providers,
            timed: false,
        }
    }

    /// Report the authentication time
    pub fn timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    pub fn is_timed(&self) -> bool {
        self.timed
    }

    /// Build both chains from configuration
    ///
    /// Sources: secure, non-secure, compact token, anonymous. Providers:
    /// request parameters, hosts, global permissions, autonomous, central.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let protocols = &config.protocols;
        let mut sources: Vec<Arc<dyn CredentialSource>> = Vec::new();
        if protocols.secure {
            sources.push(Arc::new(SecureAuthProtocol::new()));
        }
        if protocols.non_secure {
            sources.push(Arc::new(NonSecureAuthProtocol::new(
                config.token_parameter.as_str(),
            )));
        }
        if protocols.jwt {
            sources.push(Arc::new(JsonWebTokenSource::new()));
        }
        if protocols.anonymous {
            sources.push(Arc::new(AnonymousSource::new()));
        }

        let mut providers: Vec<Arc<dyn AuthProvider>> =
            vec![Arc::new(RequestParameterChecker::new())];
        if !config.hosts.is_empty() {
            providers.push(Arc::new(HostChecker::new(config.hosts.clone())));
        }
        if !config.global_permissions.is_empty() {
            providers.push(Arc::new(GlobalPermissions::new(PermissionSet::new(
                config.global_permissions.clone(),
            ))));
        }
        if let Some(autonomous) = &config.autonomous {
            providers.push(Arc::new(AutonomousAuthProvider::from_config(autonomous)));
        }
        if let Some(central) = &config.central {
            providers.push(Arc::new(CentralAuthProvider::from_config(
                central,
                &config.service,
            )?));
        }

        let plugin = Self::new(sources, providers).timed(config.timed);
        info!(
            "Authentication sources {:?}, providers {:?}",
            plugin.source_names(),
            plugin.provider_names()
        );
        Ok(plugin)
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The credential of the first source recognizing its protocol
    pub fn extract(&self, request: &AuthRequest) -> Result<Credential> {
        for source in &self.sources {
            if let Some(credential) = source.extract(request)? {
                debug!("Credential found by the {} source", source.name());
                return Ok(credential);
            }
        }

        Err(GatewayError::missing_credential(
            "You need to sign your request",
        ))
    }

    /// The decision of the first provider not deferring
    pub async fn authenticate(
        &self,
        request: &AuthRequest,
        credential: &Credential,
    ) -> Result<Decision> {
        for provider in &self.providers {
            let decision = provider.authorize(request, credential).await?;
            if !decision.is_defer() {
                debug!("Provider {} decided {:?}", provider.name(), decision);
                return Ok(decision);
            }
        }

        Err(GatewayError::DecisionExhausted(
            "No provider could decide".to_string(),
        ))
    }

    /// Extract and authenticate, logging rejections
    pub async fn check(&self, request: &AuthRequest) -> Result<Verdict> {
        let verdict = self.evaluate(request).await;
        match &verdict {
            Err(e) if e.is_rejection() => info!(
                remote_addr = request.remote_addr().unwrap_or("-"),
                status = e.status_code().as_u16(),
                "Rejected {} {}: {}",
                request.method(),
                request.path(),
                e
            ),
            Err(e) => error!(
                remote_addr = request.remote_addr().unwrap_or("-"),
                "Failed to authorize {} {}: {}",
                request.method(),
                request.path(),
                e
            ),
            Ok(_) => {}
        }
        verdict
    }

    async fn evaluate(&self, request: &AuthRequest) -> Result<Verdict> {
        let credential = self.extract(request)?;

        let start = Instant::now();
        let decision = self.authenticate(request, &credential).await?;
        let auth_time = start.elapsed();

        let access = match decision {
            Decision::Grant => Access::Granted,
            Decision::GrantWithFilter(filter) => Access::Filtered(filter),
            Decision::NonAuthoritative(paths) => Access::NonAuthoritative(paths),
            Decision::Deny(Denial::Mismatch(reason)) => {
                return Err(GatewayError::mismatch(reason));
            }
            Decision::Deny(Denial::Refused) => {
                return Err(GatewayError::denied("Access denied"));
            }
            Decision::Defer => {
                return Err(GatewayError::DecisionExhausted(
                    "No provider could decide".to_string(),
                ));
            }
        };

        Ok(Verdict {
            login: credential.login,
            access,
            auth_time,
        })
    }

    /// Run the whole pipeline around `handler`
    ///
    /// The handler is called at most once, with the request that was
    /// authenticated. Its errors are propagated untouched.
    pub async fn authorize<F, Fut>(
        &self,
        request: &AuthRequest,
        handler: F,
    ) -> Result<AuthOutcome<Value>>
    where
        F: FnOnce(&AuthRequest) -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let verdict = self.check(request).await?;

        let response = match verdict.access {
            Access::NonAuthoritative(paths) => return Ok(AuthOutcome::NonAuthoritative(paths)),
            Access::Granted => handler(request).await?,
            Access::Filtered(filter) => filter.apply(handler(request).await?)?,
        };

        Ok(AuthOutcome::Responded {
            response,
            auth_time: self.timed.then_some(verdict.auth_time),
        })
    }
}
