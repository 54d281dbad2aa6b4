//! Hashed access codes.
//!
//! `CODE` holds a comma-separated list of shared secrets. Only their
//! SHA-256 digests are kept in memory; incoming codes are hashed with
//! [`hash_access_code`] before comparison.

use std::collections::HashSet;
use std::env::VarError;

use sha2::{Digest, Sha256};

use super::env::EnvSource;

/// Environment variable holding the raw access codes.
pub const CODE_VAR: &str = "CODE";

/// Hash a single access code as lowercase hex.
pub fn hash_access_code(code: &str) -> String {
    format!("{:x}", Sha256::digest(code.as_bytes()))
}

/// Set of hashed access codes, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessCodeSet {
    hashes: HashSet<String>,
}

impl AccessCodeSet {
    /// Build the set from `CODE`.
    ///
    /// An unreadable value disables the access-code gate instead of failing.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        match env.lookup(CODE_VAR) {
            Ok(raw) => Self::from_codes(&raw),
            Err(VarError::NotPresent) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable access codes, access code gate disabled");
                Self::default()
            }
        }
    }

    /// Parse a comma-separated list of plain codes.
    pub fn from_codes(raw: &str) -> Self {
        let hashes = raw
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(hash_access_code)
            .collect();

        Self { hashes }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Check an already hashed code.
    pub fn contains_hash(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    /// Check a plain code supplied by a client.
    pub fn verify(&self, code: &str) -> bool {
        self.contains_hash(&hash_access_code(code.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hashes.iter().map(String::as_str)
    }
}
