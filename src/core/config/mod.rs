//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$TERMINAL221B_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/terminal221b/config.toml`
//! 3. `<data root>/config.toml` (canonical write location)
//!
//! Writes go back to the file that was loaded, or the canonical location
//! when none was.
//!
//! # Example
//!
//! ```no_run
//! use terminal221b::core::config::Config;
//! use terminal221b::core::paths::AppPaths;
//!
//! let paths = AppPaths::discover();
//! let config = Config::load(paths.as_ref()).unwrap();
//!
//! println!("Default agent: {}", config.default_agent());
//! println!("Interactive: {}", config.interactive());
//! ```

pub mod schema;

pub use schema::{AgentsConfig, GlobalConfig, SecretsConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::agents::{AgentKind, DEFAULT_AGENT};
use crate::agents::types::DEFAULT_TEMPERATURE;
use crate::core::paths::AppPaths;
use crate::secrets::DEFAULT_PROVIDER;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TERMINAL221B_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for unset values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path the config was loaded from, if any.
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. Missing files are not an error.
    pub fn load(paths: Option<&AppPaths>) -> Result<Config, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        Self::load_from(&Self::candidates(explicit, xdg, paths))
    }

    /// Candidate files in search order.
    fn candidates(
        explicit: Option<PathBuf>,
        xdg_home: Option<PathBuf>,
        paths: Option<&AppPaths>,
    ) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            candidates.push(path);
        }
        if let Some(xdg) = xdg_home.filter(|p| !p.as_os_str().is_empty()) {
            candidates.push(xdg.join("terminal221b").join("config.toml"));
        }
        if let Some(paths) = paths {
            candidates.push(paths.config_path());
        }
        candidates
    }

    /// Load the first existing candidate.
    fn load_from(candidates: &[PathBuf]) -> Result<Config, ConfigError> {
        for path in candidates {
            if path.exists() {
                let global = Self::read_global_config(path)?;
                global.validate()?;
                return Ok(Config {
                    global,
                    loaded_from: Some(path.clone()),
                });
            }
        }
        Ok(Config::default())
    }

    /// Read and parse a config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Where [`save`](Self::save) will write.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` when nothing was loaded and no data
    /// root is known.
    pub fn write_target(&self, paths: Option<&AppPaths>) -> Result<PathBuf, ConfigError> {
        match (&self.loaded_from, paths) {
            (Some(path), _) => Ok(path.clone()),
            (None, Some(paths)) => Ok(paths.config_path()),
            (None, None) => Err(ConfigError::NoHomeDir),
        }
    }

    /// Validate and write the config atomically.
    ///
    /// Returns the path written.
    pub fn save(&mut self, paths: Option<&AppPaths>) -> Result<PathBuf, ConfigError> {
        self.global.validate()?;
        let path = self.write_target(paths)?;
        Self::write_config_atomic(&path, &self.global)?;
        self.loaded_from = Some(path.clone());
        Ok(path)
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, syncs, then renames over the target.
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Check if interactive mode is enabled by default.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Agent used by `run` when none is requested.
    ///
    /// Defaults to the analyst. Validation guarantees a configured name is
    /// a built-in agent.
    pub fn default_agent(&self) -> AgentKind {
        self.global
            .agents
            .as_ref()
            .and_then(|a| a.default.as_deref())
            .and_then(AgentKind::from_name)
            .unwrap_or(DEFAULT_AGENT)
    }

    /// Sampling temperature for new sessions.
    pub fn temperature(&self) -> f32 {
        self.global
            .agents
            .as_ref()
            .and_then(|a| a.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Get the secrets provider.
    ///
    /// Defaults to "file" if not configured.
    pub fn secrets_provider(&self) -> &str {
        self.global
            .secrets
            .as_ref()
            .and_then(|s| s.provider.as_deref())
            .unwrap_or(DEFAULT_PROVIDER)
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}
