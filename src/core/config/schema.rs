//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$TERMINAL221B_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/terminal221b/config.toml`
//! 3. `~/.terminal221b/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `agents.default` must
//! name a built-in agent).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::agents::AgentKind;

/// Lowest accepted sampling temperature.
pub const MIN_TEMPERATURE: f32 = 0.0;

/// Highest accepted sampling temperature.
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// interactive = true
///
/// [agents]
/// default = "analyst"
/// temperature = 0.7
///
/// [secrets]
/// provider = "file"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default interactive mode
    pub interactive: Option<bool>,

    /// Agent defaults
    pub agents: Option<AgentsConfig>,

    /// Secret storage settings
    pub secrets: Option<SecretsConfig>,
}

impl GlobalConfig {
    /// Dotted keys accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: &'static [&'static str] = &[
        "interactive",
        "agents.default",
        "agents.temperature",
        "secrets.provider",
    ];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(agents) = &self.agents {
            agents.validate()?;
        }

        if let Some(secrets) = &self.secrets {
            secrets.validate()?;
        }

        Ok(())
    }

    /// Read a value by dotted key.
    ///
    /// Returns `Ok(None)` when the key is known but unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys not in [`KEYS`](Self::KEYS).
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let value = match key {
            "interactive" => self.interactive.map(|v| v.to_string()),
            "agents.default" => self.agents.as_ref().and_then(|a| a.default.clone()),
            "agents.temperature" => self
                .agents
                .as_ref()
                .and_then(|a| a.temperature)
                .map(|t| t.to_string()),
            "secrets.provider" => self.secrets.as_ref().and_then(|s| s.provider.clone()),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Set a value by dotted key, parsing and validating it.
    ///
    /// The config is left unchanged when the value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "interactive" => {
                let parsed = value.parse::<bool>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "interactive must be true or false, got '{}'",
                        value
                    ))
                })?;
                updated.interactive = Some(parsed);
            }
            "agents.default" => {
                updated.agents.get_or_insert_with(Default::default).default =
                    Some(value.to_string());
            }
            "agents.temperature" => {
                let parsed = value.parse::<f32>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "agents.temperature must be a number, got '{}'",
                        value
                    ))
                })?;
                updated.agents.get_or_insert_with(Default::default).temperature = Some(parsed);
            }
            "secrets.provider" => {
                updated.secrets.get_or_insert_with(Default::default).provider =
                    Some(value.to_string());
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

/// Agent defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AgentsConfig {
    /// Agent used by `run` when `--agent` is not given
    pub default: Option<String>,

    /// Sampling temperature for new sessions
    pub temperature: Option<f32>,
}

impl AgentsConfig {
    /// Validate the agent defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.default {
            if AgentKind::from_name(name).is_none() {
                let valid: Vec<&str> = AgentKind::ALL.iter().map(|k| k.name()).collect();
                return Err(ConfigError::InvalidValue(format!(
                    "invalid default agent '{}', must be one of: {}",
                    name,
                    valid.join(", ")
                )));
            }
        }

        if let Some(t) = self.temperature {
            if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t) {
                return Err(ConfigError::InvalidValue(format!(
                    "agents.temperature must be between {} and {}, got {}",
                    MIN_TEMPERATURE, MAX_TEMPERATURE, t
                )));
            }
        }

        Ok(())
    }
}

/// Secrets configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SecretsConfig {
    /// Provider to use ("file" or "keychain")
    pub provider: Option<String>,
}

impl SecretsConfig {
    /// Valid secret providers.
    pub const VALID_PROVIDERS: &'static [&'static str] = &["file", "keychain"];

    /// Validate the secrets configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(provider) = &self.provider {
            if !Self::VALID_PROVIDERS.contains(&provider.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid secrets provider '{}', must be one of: {}",
                    provider,
                    Self::VALID_PROVIDERS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = GlobalConfig::default();
            assert!(config.interactive.is_none());
            assert!(config.agents.is_none());
            assert!(config.secrets.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn roundtrip() {
            let config = GlobalConfig {
                interactive: Some(false),
                agents: Some(AgentsConfig {
                    default: Some("writer".to_string()),
                    temperature: Some(0.5),
                }),
                secrets: Some(SecretsConfig {
                    provider: Some("file".to_string()),
                }),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                interactive = true
                default_forge = "github"
            "#;

            let result: Result<GlobalConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }

        #[test]
        fn reject_unknown_nested_fields() {
            let toml = r#"
                [agents]
                model = "big"
            "#;

            let result: Result<GlobalConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn get_unset_is_none() {
            let config = GlobalConfig::default();
            for key in GlobalConfig::KEYS {
                assert_eq!(config.get(key).unwrap(), None, "{key}");
            }
        }

        #[test]
        fn set_then_get() {
            let mut config = GlobalConfig::default();
            config.set("interactive", "false").unwrap();
            config.set("agents.default", "engineer").unwrap();
            config.set("agents.temperature", "1.25").unwrap();
            config.set("secrets.provider", "keychain").unwrap();

            assert_eq!(config.get("interactive").unwrap().as_deref(), Some("false"));
            assert_eq!(
                config.get("agents.default").unwrap().as_deref(),
                Some("engineer")
            );
            assert_eq!(
                config.get("agents.temperature").unwrap().as_deref(),
                Some("1.25")
            );
            assert_eq!(
                config.get("secrets.provider").unwrap().as_deref(),
                Some("keychain")
            );
        }

        #[test]
        fn unknown_key() {
            let mut config = GlobalConfig::default();
            assert!(matches!(
                config.get("trunk"),
                Err(ConfigError::UnknownKey(_))
            ));
            assert!(matches!(
                config.set("trunk", "main"),
                Err(ConfigError::UnknownKey(_))
            ));
        }

        #[test]
        fn rejected_value_leaves_config_unchanged() {
            let mut config = GlobalConfig::default();
            config.set("agents.default", "writer").unwrap();

            assert!(config.set("agents.default", "wizard").is_err());
            assert!(config.set("agents.temperature", "hot").is_err());
            assert!(config.set("interactive", "maybe").is_err());

            assert_eq!(
                config.get("agents.default").unwrap().as_deref(),
                Some("writer")
            );
            assert_eq!(config.get("agents.temperature").unwrap(), None);
        }
    }

    mod agents_config {
        use super::*;

        #[test]
        fn every_builtin_agent_is_valid() {
            for kind in AgentKind::ALL {
                let config = AgentsConfig {
                    default: Some(kind.name().to_string()),
                    temperature: None,
                };
                assert!(config.validate().is_ok());
            }
        }

        #[test]
        fn temperature_bounds_inclusive() {
            for t in [0.0, 0.7, 2.0] {
                let config = AgentsConfig {
                    default: None,
                    temperature: Some(t),
                };
                assert!(config.validate().is_ok(), "{t}");
            }
        }

        #[test]
        fn temperature_out_of_range() {
            for t in [-0.1, 2.5] {
                let config = AgentsConfig {
                    default: None,
                    temperature: Some(t),
                };
                assert!(config.validate().is_err(), "{t}");
            }
        }
    }

    mod secrets_config {
        use super::*;

        #[test]
        fn valid_providers() {
            for provider in SecretsConfig::VALID_PROVIDERS {
                let config = SecretsConfig {
                    provider: Some(provider.to_string()),
                };
                assert!(config.validate().is_ok());
            }
        }

        #[test]
        fn invalid_provider() {
            let config = SecretsConfig {
                provider: Some("invalid".to_string()),
            };
            assert!(config.validate().is_err());
        }
    }
}
