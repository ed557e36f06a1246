//! license::key
//!
//! License key format validation and tier classification.
//!
//! A key is valid when it carries a known tier prefix (`PRO_` or `ENT_`)
//! and is at least [`MIN_KEY_LEN`] characters long. Keys are checked for
//! format only; nothing is verified against a payment provider.
//!
//! # Example
//!
//! ```
//! use terminal221b::license::{is_valid_key, LicenseKey, LicenseTier};
//!
//! assert!(is_valid_key("PRO_1234567890123456"));
//! assert!(!is_valid_key("PRO_123"));
//!
//! let key = LicenseKey::parse("ENT_1234567890123456").unwrap();
//! assert_eq!(key.tier(), LicenseTier::Enterprise);
//! ```

use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

use super::tier::LicenseTier;

/// Minimum key length in characters, prefix included.
pub const MIN_KEY_LEN: usize = 20;

/// Prefix of Pro keys.
pub const PRO_PREFIX: &str = "PRO_";

/// Prefix of Enterprise keys.
pub const ENTERPRISE_PREFIX: &str = "ENT_";

/// Errors from key parsing.
///
/// Messages never include the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("license key is empty")]
    Empty,

    #[error("license key must start with PRO_ or ENT_")]
    UnknownPrefix,

    #[error("license key is too short ({len} characters, need at least {min})")]
    TooShort { len: usize, min: usize },
}

/// A license key that passed format validation.
///
/// `Debug` and `Display` redact the key; use [`LicenseKey::expose`] to get
/// the raw value.
#[derive(Clone, PartialEq, Eq)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// Parse and validate a raw key.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        if raw.is_empty() {
            return Err(KeyError::Empty);
        }
        if !raw.starts_with(PRO_PREFIX) && !raw.starts_with(ENTERPRISE_PREFIX) {
            return Err(KeyError::UnknownPrefix);
        }
        let len = raw.chars().count();
        if len < MIN_KEY_LEN {
            return Err(KeyError::TooShort {
                len,
                min: MIN_KEY_LEN,
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// The tier this key unlocks.
    pub fn tier(&self) -> LicenseTier {
        if self.0.starts_with(ENTERPRISE_PREFIX) {
            LicenseTier::Enterprise
        } else {
            LicenseTier::Pro
        }
    }

    /// Short, stable identifier for the key.
    ///
    /// The first 12 hex characters of the SHA-256 digest. Safe to print.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut encoded = hex::encode(digest);
        encoded.truncate(12);
        encoded
    }

    /// The raw key. Do not log or print it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LicenseKey({})", self.fingerprint())
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}…{}", &self.0[..PRO_PREFIX.len()], self.fingerprint())
    }
}

/// Check a raw key's format.
pub fn is_valid_key(raw: &str) -> bool {
    LicenseKey::parse(raw).is_ok()
}
