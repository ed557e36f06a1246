//! secrets
//!
//! Secret storage for the activated license key.
//!
//! # Architecture
//!
//! Secrets are stored through the `SecretStore` trait:
//!
//! - [`FileSecretStore`]: `<data root>/secrets.toml` (default)
//! - [`KeychainSecretStore`]: OS keychain (optional, feature-gated)
//!
//! # Security
//!
//! - Secrets are **never** logged or included in error messages
//! - File store uses 0600 permissions on Unix (owner read/write only)
//! - All file writes are atomic (temp file + rename)

mod file_store;
mod keychain_store;
mod traits;

pub use file_store::FileSecretStore;
pub use keychain_store::{KeychainSecretStore, KEYCHAIN_SERVICE};
pub use traits::{SecretError, SecretStore};

use crate::core::paths::AppPaths;

/// The default secret store provider name.
pub const DEFAULT_PROVIDER: &str = "file";

/// Create a secret store based on the provider name.
///
/// # Providers
///
/// - `"file"` (default): [`FileSecretStore`] under the data root
/// - `"keychain"`: [`KeychainSecretStore`] (requires the `keychain` feature)
///
/// # Errors
///
/// - Unknown provider name
/// - Keychain provider without `keychain` feature enabled
/// - File provider with no known data root
pub fn create_store(
    provider: &str,
    paths: Option<&AppPaths>,
) -> Result<Box<dyn SecretStore>, SecretError> {
    match provider {
        "file" => {
            let paths = paths.ok_or_else(|| {
                SecretError::ProviderNotAvailable("cannot determine home directory".into())
            })?;
            Ok(Box::new(FileSecretStore::new(paths)))
        }
        "keychain" => Ok(Box::new(KeychainSecretStore::new()?)),
        other => Err(SecretError::ProviderNotAvailable(format!(
            "unknown secret provider: '{}' (valid: file, keychain)",
            other
        ))),
    }
}
