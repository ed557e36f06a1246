//! secrets::file_store
//!
//! File-based secret storage.
//!
//! - Secrets are stored in `<data root>/secrets.toml`
//! - File permissions are set to 0600 on Unix (owner read/write only)
//! - All writes are atomic (write to temp file, then rename)

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::traits::{SecretError, SecretStore};
use crate::core::paths::AppPaths;

/// File-based secret storage.
///
/// This is the default secret store.
#[derive(Debug)]
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    /// Create a store at the data root's `secrets.toml`.
    pub fn new(paths: &AppPaths) -> Self {
        Self {
            path: paths.secrets_path(),
        }
    }

    /// Create a file secret store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_secrets(&self) -> Result<BTreeMap<String, String>, SecretError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SecretError::ReadError(format!("cannot read secrets file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SecretError::ReadError(format!("cannot parse secrets file: {}", e)))
    }

    fn write_secrets(&self, secrets: &BTreeMap<String, String>) -> Result<(), SecretError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SecretError::WriteError(format!("cannot create directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(secrets)
            .map_err(|e| SecretError::WriteError(format!("cannot serialize secrets: {}", e)))?;

        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| SecretError::WriteError(format!("cannot create temp file: {}", e)))?;

            // Restrict before any content lands on disk.
            #[cfg(unix)]
            {
                let permissions = fs::Permissions::from_mode(0o600);
                file.set_permissions(permissions).map_err(|e| {
                    SecretError::WriteError(format!("cannot set permissions: {}", e))
                })?;
            }

            file.write_all(content.as_bytes())
                .map_err(|e| SecretError::WriteError(format!("cannot write secrets: {}", e)))?;

            file.sync_all()
                .map_err(|e| SecretError::WriteError(format!("cannot sync to disk: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path)
            .map_err(|e| SecretError::WriteError(format!("cannot rename temp file: {}", e)))?;

        Ok(())
    }

    /// Returns true if the file doesn't exist or has 0600 permissions.
    #[cfg(unix)]
    pub fn verify_permissions(&self) -> Result<bool, SecretError> {
        if !self.path.exists() {
            return Ok(true);
        }

        let metadata = fs::metadata(&self.path)
            .map_err(|e| SecretError::ReadError(format!("cannot read file metadata: {}", e)))?;

        Ok(metadata.permissions().mode() & 0o777 == 0o600)
    }

    #[cfg(not(unix))]
    pub fn verify_permissions(&self) -> Result<bool, SecretError> {
        Ok(true)
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        Ok(self.read_secrets()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SecretError> {
        let mut secrets = self.read_secrets()?;
        secrets.insert(key.to_string(), value.to_string());
        self.write_secrets(&secrets)
    }

    fn delete(&self, key: &str) -> Result<(), SecretError> {
        let mut secrets = self.read_secrets()?;
        if secrets.remove(key).is_none() {
            return Ok(());
        }
        self.write_secrets(&secrets)
    }
}
