//! Environment sources.
//!
//! The loader never touches `std::env` directly. It reads through an
//! [`EnvSource`], which is either the real process environment or an
//! in-memory map (used by tests and embedders).

use std::collections::HashMap;
use std::env::VarError;

/// A read-only view of named environment variables.
pub trait EnvSource: Send + Sync {
    /// Look up a variable, mirroring [`std::env::var`].
    fn lookup(&self, key: &str) -> Result<String, VarError>;

    /// Whether a process environment exists in this execution context.
    fn is_available(&self) -> bool {
        true
    }

    /// Value of `key`, or `None` when absent.
    ///
    /// Values that are present but not valid Unicode are treated as absent.
    fn var(&self, key: &str) -> Option<String> {
        match self.lookup(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(key, "Ignoring environment variable with non-unicode value");
                None
            }
        }
    }

    /// Value of `key`, or `default` when absent. An empty value is kept.
    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }

    /// `true` iff `key` is present and non-empty.
    fn flag(&self, key: &str) -> bool {
        self.var(key).is_some_and(|v| !v.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }

    fn is_available(&self) -> bool {
        // Browser-side wasm builds have no process environment.
        !cfg!(all(target_arch = "wasm32", target_os = "unknown"))
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
    available: bool,
}

impl MapEnv {
    /// Create an empty, available environment.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            available: true,
        }
    }

    /// An environment that reports no process environment at all.
    pub fn unavailable() -> Self {
        Self {
            vars: HashMap::new(),
            available: false,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

impl EnvSource for MapEnv {
    fn lookup(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
