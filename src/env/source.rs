//! Environment variable source seam.

use std::collections::HashMap;

/// Read-only access to environment variables.
///
/// Production code uses [`SystemEnv`]; tests use [`FixedEnv`] so resolution
/// can be exercised without mutating the process environment.
pub trait EnvSource: Send + Sync {
    /// Look up a variable. `None` when unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, treating an empty value as unset.
    fn var_non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed map of variables for tests and hermetic embedding.
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
    vars: HashMap<String, String>,
}

impl FixedEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable (builder style).
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for FixedEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
