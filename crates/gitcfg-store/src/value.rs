//! A single configuration value with its provenance

use serde::Serialize;

use crate::Scope;

/// One value of a configuration key, tagged with the scope it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigValue {
    scope: Scope,
    #[serde(rename = "value")]
    raw: String,
}

impl ConfigValue {
    pub fn new(scope: Scope, raw: impl Into<String>) -> Self {
        Self {
            scope,
            raw: raw.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.raw
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Replace the value in place, keeping its scope.
    pub fn set(&mut self, value: impl Into<String>) {
        self.raw = value.into();
    }
}

/// Interpret `value` as a git boolean.
///
/// `yes`, `true`, `on` and `no`, `false`, `off` are accepted in any case.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "on" => Some(true),
        "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
