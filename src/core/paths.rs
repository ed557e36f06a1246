//! core::paths
//!
//! Centralized path routing for Terminal221b storage locations.
//!
//! # Storage Layout
//!
//! All data lives under a single root, `~/.terminal221b/` by default or
//! `$TERMINAL221B_HOME` when set:
//! - `config.toml` - User configuration (canonical write location)
//! - `secrets.toml` - File secret store (activated license key)
//!
//! No code outside this module should join file names onto the root.
//!
//! # Example
//!
//! ```
//! use terminal221b::core::paths::AppPaths;
//! use std::path::PathBuf;
//!
//! let paths = AppPaths::new(PathBuf::from("/home/me/.terminal221b"));
//! assert_eq!(
//!     paths.config_path(),
//!     PathBuf::from("/home/me/.terminal221b/config.toml")
//! );
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the data root.
pub const HOME_ENV: &str = "TERMINAL221B_HOME";

/// Directory under the user's home used when no override is set.
pub const DEFAULT_DIR_NAME: &str = ".terminal221b";

/// Storage locations for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Data root.
    pub root: PathBuf,
}

impl AppPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the data root from the environment.
    ///
    /// `$TERMINAL221B_HOME` wins when set and non-empty, otherwise
    /// `~/.terminal221b`. Returns `None` when neither can be determined.
    pub fn discover() -> Option<Self> {
        Self::resolve(std::env::var_os(HOME_ENV).map(PathBuf::from), dirs::home_dir())
    }

    fn resolve(override_root: Option<PathBuf>, home: Option<PathBuf>) -> Option<Self> {
        match override_root.filter(|p| !p.as_os_str().is_empty()) {
            Some(root) => Some(Self::new(root)),
            None => home.map(|h| Self::new(h.join(DEFAULT_DIR_NAME))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/config.toml`
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// `<root>/secrets.toml`
    pub fn secrets_path(&self) -> PathBuf {
        self.root.join("secrets.toml")
    }
}
