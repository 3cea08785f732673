//! Read-only view of the request being authenticated

use actix_web::HttpRequest;
use actix_web::http::Method;
use actix_web::http::header::{HOST, HeaderMap, HeaderName, HeaderValue};

/// The parts of an inbound request the pipeline looks at
///
/// Sources and providers only ever borrow it, so the request seen by the
/// downstream handler is exactly the one that was authenticated.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    method: Method,
    path: String,
    query_string: String,
    headers: HeaderMap,
    remote_addr: Option<String>,
}

impl AuthRequest {
    /// Create a request view from its method and path
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_string: String::new(),
            headers: HeaderMap::new(),
            remote_addr: None,
        }
    }

    /// Capture an actix request
    pub fn from_http_request(req: &HttpRequest) -> Self {
        let mut headers = req.headers().clone();
        // HTTP/2 requests carry the host in the URI authority
        if !headers.contains_key(HOST) {
            if let Some(authority) = req.uri().authority() {
                if let Ok(value) = HeaderValue::from_str(authority.as_str()) {
                    headers.insert(HOST, value);
                }
            }
        }

        Self {
            method: req.method().clone(),
            path: req.path().to_string(),
            query_string: req.query_string().to_string(),
            headers,
            remote_addr: req.connection_info().peer_addr().map(str::to_string),
        }
    }

    /// Set the raw query string, without the leading `?`
    pub fn with_query(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = query_string.into();
        self
    }

    /// Add a header; invalid names or values are ignored
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set the peer address
    pub fn with_remote_addr(mut self, remote_addr: impl Into<String>) -> Self {
        self.remote_addr = Some(remote_addr.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path as sent, still percent-encoded
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as text, `None` when absent or not visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// The `Host` header
    pub fn host(&self) -> Option<&str> {
        self.header(HOST.as_str())
    }

    pub fn remote_addr(&self) -> Option<&str> {
        self.remote_addr.as_deref()
    }

    /// Path followed by `?query` when there is a query string
    pub fn path_with_query(&self) -> String {
        if self.query_string.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string)
        }
    }

    /// First value of a query parameter, percent-decoded
    pub fn query_param(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query_string.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// A GET or HEAD on a collection, whose response is a listing
    pub fn is_collection_listing(&self) -> bool {
        self.path.ends_with('/') && (self.method == Method::GET || self.method == Method::HEAD)
    }
}
