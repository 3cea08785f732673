//! Response filtering

use super::types::{Permission, PermissionSet};
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Narrows a listing response to the paths the caller may see
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionFilter {
    rules: PermissionSet,
}

impl PermissionFilter {
    pub fn new(rules: PermissionSet) -> Self {
        Self { rules }
    }

    /// Filter for the listings of `service` under `permissions`
    pub fn for_service(service: &str, permissions: Vec<Permission>) -> Self {
        Self::new(PermissionSet::new(permissions).on_host(service))
    }

    pub fn rules(&self) -> &PermissionSet {
        &self.rules
    }

    /// Restrict a list of paths, or a mapping keyed by path, to the authorized
    /// entries. Any other shape is an error.
    pub fn apply(&self, response: Value) -> Result<Value> {
        match response {
            Value::Array(items) => {
                let paths = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| {
                            GatewayError::internal("Cannot filter a list of non path items")
                        })
                    })
                    .collect::<Result<Vec<&str>>>()?;

                let allowed = self.rules.filter_paths(paths.iter().copied());
                debug!("Filtered {}/{} urls", allowed.len(), paths.len());

                Ok(Value::Array(
                    allowed.into_iter().map(|p| Value::String(p.to_string())).collect(),
                ))
            }
            Value::Object(mut map) => {
                let total = map.len();
                let allowed: HashSet<String> = self
                    .rules
                    .filter_paths(map.keys().map(String::as_str))
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                debug!("Filtered {}/{} urls", allowed.len(), total);

                map.retain(|key, _| allowed.contains(key));
                Ok(Value::Object(map))
            }
            other => Err(GatewayError::internal(format!(
                "Cannot filter a response of type {}",
                json_type(&other)
            ))),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
