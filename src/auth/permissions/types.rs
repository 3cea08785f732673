//! Permission types

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const WILDCARD: char = '*';

/// A host or path pattern where `*` matches any run of characters
#[derive(Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern; everything but `*` is literal
    pub fn new(raw: &str) -> Result<Self, regex::Error> {
        let body = raw
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{}$", body))?;

        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    pub fn has_wildcard(&self) -> bool {
        self.raw.contains(WILDCARD)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.raw)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// Methods granted by a permission
#[derive(Debug, Clone, PartialEq)]
pub enum Methods {
    Any,
    Only(Vec<String>),
}

impl Methods {
    pub fn allows(&self, method: &str) -> bool {
        match self {
            Methods::Any => true,
            Methods::Only(methods) => methods.iter().any(|m| m.eq_ignore_ascii_case(method)),
        }
    }
}

/// Either a single method, usually `*`, or a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MethodsSpec {
    One(String),
    Many(Vec<String>),
}

/// Wire and configuration form of a permission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPermission {
    #[serde(default = "any_host")]
    pub host: String,
    pub methods: MethodsSpec,
    pub path: String,
}

fn any_host() -> String {
    WILDCARD.to_string()
}

/// `{host, methods, path}` rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPermission", into = "RawPermission")]
pub struct Permission {
    host: Pattern,
    methods: Methods,
    path: Pattern,
}

impl Permission {
    pub fn new(host: &str, methods: &[&str], path: &str) -> Result<Self, regex::Error> {
        let methods = if methods.iter().any(|m| *m == "*") {
            Methods::Any
        } else {
            Methods::Only(methods.iter().map(|m| m.to_ascii_uppercase()).collect())
        };

        Ok(Self {
            host: Pattern::new(host)?,
            methods,
            path: Pattern::new(path)?,
        })
    }

    pub fn host(&self) -> &Pattern {
        &self.host
    }

    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    pub fn path(&self) -> &Pattern {
        &self.path
    }

    pub fn applies_to_host(&self, host: &str) -> bool {
        self.host.matches(host)
    }

    pub fn allows(&self, method: &str, path: &str) -> bool {
        self.methods.allows(method) && self.path.matches(path)
    }
}

impl TryFrom<RawPermission> for Permission {
    type Error = String;

    fn try_from(raw: RawPermission) -> Result<Self, Self::Error> {
        let methods = match &raw.methods {
            MethodsSpec::One(method) => vec![method.as_str()],
            MethodsSpec::Many(methods) => methods.iter().map(String::as_str).collect(),
        };

        Permission::new(&raw.host, &methods, &raw.path)
            .map_err(|e| format!("Invalid permission pattern: {}", e))
    }
}

impl From<Permission> for RawPermission {
    fn from(permission: Permission) -> Self {
        let methods = match permission.methods {
            Methods::Any => MethodsSpec::One(WILDCARD.to_string()),
            Methods::Only(methods) => MethodsSpec::Many(methods),
        };

        RawPermission {
            host: permission.host.raw,
            methods,
            path: permission.path.raw,
        }
    }
}

/// Ordered collection of permissions, optionally scoped to one host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionSet {
    scope: Option<String>,
    permissions: Vec<Permission>,
}

impl PermissionSet {
    pub fn new(permissions: Vec<Permission>) -> Self {
        Self {
            scope: None,
            permissions,
        }
    }

    /// The subset of permissions applying to `host`
    pub fn on_host(&self, host: &str) -> Self {
        Self {
            scope: Some(host.to_string()),
            permissions: self
                .permissions
                .iter()
                .filter(|p| p.applies_to_host(host))
                .cloned()
                .collect(),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    pub fn authorized(&self, host: &str, method: &str, path: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.applies_to_host(host) && p.allows(method, path))
    }

    /// The candidates the scoped host lets the caller read, in order
    pub fn filter_paths<'a, I>(&self, candidates: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|path| match &self.scope {
                Some(host) => self.authorized(host, "GET", path),
                None => self.permissions.iter().any(|p| p.allows("GET", path)),
            })
            .collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
