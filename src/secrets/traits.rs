//! secrets::traits
//!
//! Secret storage trait definition.
//!
//! # Design
//!
//! The `SecretStore` trait defines a simple key-value interface for secrets.
//! Keys are namespaced (e.g., "license.key") to avoid collisions.
//!
//! # Security
//!
//! Implementations MUST:
//! - Never log, print, or include secrets in error messages
//! - Be thread-safe (Send + Sync)

use thiserror::Error;

/// Errors from secret storage operations.
///
/// Error messages never include secret values.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Failed to read from secret storage.
    #[error("failed to read secret: {0}")]
    ReadError(String),

    /// Failed to write to secret storage.
    #[error("failed to write secret: {0}")]
    WriteError(String),

    /// Failed to delete from secret storage.
    #[error("failed to delete secret: {0}")]
    DeleteError(String),

    /// Provider not available or not configured.
    #[error("secret provider not available: {0}")]
    ProviderNotAvailable(String),
}

/// Trait for secret storage providers.
///
/// # Example
///
/// ```
/// use terminal221b::secrets::{FileSecretStore, SecretStore};
///
/// let dir = tempfile::TempDir::new().unwrap();
/// let store = FileSecretStore::with_path(dir.path().join("secrets.toml"));
///
/// store.set("license.key", "PRO_ABCDEFGHIJKLMNOPQRST").unwrap();
/// assert!(store.exists("license.key").unwrap());
///
/// store.delete("license.key").unwrap();
/// assert_eq!(store.get("license.key").unwrap(), None);
/// ```
pub trait SecretStore: Send + Sync {
    /// Get a secret by key.
    ///
    /// Returns `Ok(None)` if the secret does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, SecretError>;

    /// Set a secret, overwriting any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), SecretError>;

    /// Delete a secret.
    ///
    /// Returns `Ok(())` even if the secret did not exist.
    fn delete(&self, key: &str) -> Result<(), SecretError>;

    /// Check if a secret exists.
    fn exists(&self, key: &str) -> Result<bool, SecretError> {
        Ok(self.get(key)?.is_some())
    }
}
