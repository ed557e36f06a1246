//! secrets::keychain_store
//!
//! Secret storage in the OS keychain via the `keyring` crate (macOS
//! Keychain, Windows Credential Manager, Linux Secret Service).
//!
//! Only functional with the `keychain` feature; without it every operation
//! reports the provider as unavailable.

#[cfg(feature = "keychain")]
use keyring::Entry;

use super::traits::{SecretError, SecretStore};

/// Keychain service name for all entries.
pub const KEYCHAIN_SERVICE: &str = "terminal221b";

#[cfg(feature = "keychain")]
#[derive(Debug)]
pub struct KeychainSecretStore {
    service: String,
}

#[cfg(feature = "keychain")]
impl KeychainSecretStore {
    pub fn new() -> Result<Self, SecretError> {
        Ok(Self::with_service(KEYCHAIN_SERVICE))
    }

    /// Use a custom service name, e.g. to isolate tests.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<Entry, SecretError> {
        Entry::new(&self.service, key)
            .map_err(|e| SecretError::ReadError(format!("cannot create keyring entry: {}", e)))
    }
}

#[cfg(feature = "keychain")]
impl SecretStore for KeychainSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match self.entry(key)?.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(keyring::Error::Ambiguous(_)) => Err(SecretError::ReadError(
                "ambiguous keychain entry".to_string(),
            )),
            Err(e) => Err(SecretError::ReadError(format!(
                "cannot read from keychain: {}",
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SecretError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| SecretError::WriteError(format!("cannot write to keychain: {}", e)))
    }

    fn delete(&self, key: &str) -> Result<(), SecretError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretError::DeleteError(format!(
                "cannot delete from keychain: {}",
                e
            ))),
        }
    }
}

#[cfg(not(feature = "keychain"))]
#[derive(Debug)]
pub struct KeychainSecretStore {
    _private: (),
}

#[cfg(not(feature = "keychain"))]
impl KeychainSecretStore {
    /// Always fails when compiled without the `keychain` feature.
    pub fn new() -> Result<Self, SecretError> {
        Err(not_enabled())
    }
}

#[cfg(not(feature = "keychain"))]
fn not_enabled() -> SecretError {
    SecretError::ProviderNotAvailable(
        "keychain support not enabled (compile with --features keychain)".into(),
    )
}

#[cfg(not(feature = "keychain"))]
impl SecretStore for KeychainSecretStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SecretError> {
        Err(not_enabled())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SecretError> {
        Err(not_enabled())
    }

    fn delete(&self, _key: &str) -> Result<(), SecretError> {
        Err(not_enabled())
    }
}

#[cfg(all(test, feature = "keychain"))]
mod tests {
    use super::*;

    // These touch the real system keychain under a per-process service.
    fn test_service() -> String {
        format!("terminal221b-test-{}", std::process::id())
    }

    #[test]
    fn default_service() {
        let store = KeychainSecretStore::new().unwrap();
        assert_eq!(store.service(), "terminal221b");
    }

    #[test]
    fn set_get_delete() {
        let store = KeychainSecretStore::with_service(test_service());
        let key = "license.key";
        let _ = store.delete(key);

        store.set(key, "PRO_ABCDEFGHIJKLMNOPQRST").expect("set");
        assert_eq!(
            store.get(key).expect("get"),
            Some("PRO_ABCDEFGHIJKLMNOPQRST".to_string())
        );

        store.delete(key).expect("delete");
        assert!(store.get(key).expect("get after delete").is_none());
        store.delete(key).expect("delete is idempotent");
    }
}

#[cfg(all(test, not(feature = "keychain")))]
mod tests {
    use super::*;

    #[test]
    fn new_fails_without_feature() {
        let err = KeychainSecretStore::new().unwrap_err().to_string();
        assert!(err.contains("keychain"));
        assert!(err.contains("not enabled"));
    }
}
