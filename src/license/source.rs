//! license::source
//!
//! Where the license key comes from.
//!
//! Lookup order:
//! 1. `$LICENSE_KEY`, when set and non-empty
//! 2. The activated key in the secret store (`license.key`)
//!
//! The raw value is handed to [`LicenseManager`](super::LicenseManager)
//! unvalidated so an invalid key still produces the invalid-key fallback.

use serde::Serialize;
use std::fmt;

use crate::secrets::{SecretError, SecretStore};

use super::manager::LICENSE_KEY_ENV;

/// Secret store entry holding an activated key.
pub const LICENSE_SECRET_KEY: &str = "license.key";

/// Origin of the key in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    Environment,
    SecretStore,
    None,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Environment => write!(f, "${}", LICENSE_KEY_ENV),
            KeySource::SecretStore => f.write_str("secret store"),
            KeySource::None => f.write_str("none"),
        }
    }
}

/// A raw key and where it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub raw: Option<String>,
    pub source: KeySource,
}

impl fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("present", &self.raw.is_some())
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve the key from an environment value and an optional store.
///
/// # Errors
///
/// Propagates store read failures.
pub fn resolve_key(
    env_value: Option<String>,
    store: Option<&dyn SecretStore>,
) -> Result<ResolvedKey, SecretError> {
    if let Some(raw) = env_value.filter(|v| !v.is_empty()) {
        return Ok(ResolvedKey {
            raw: Some(raw),
            source: KeySource::Environment,
        });
    }

    if let Some(store) = store {
        if let Some(raw) = store.get(LICENSE_SECRET_KEY)?.filter(|v| !v.is_empty()) {
            return Ok(ResolvedKey {
                raw: Some(raw),
                source: KeySource::SecretStore,
            });
        }
    }

    Ok(ResolvedKey {
        raw: None,
        source: KeySource::None,
    })
}

/// Resolve the key from `$LICENSE_KEY` and an optional store.
pub fn resolve_key_from_env(store: Option<&dyn SecretStore>) -> Result<ResolvedKey, SecretError> {
    resolve_key(std::env::var(LICENSE_KEY_ENV).ok(), store)
}
