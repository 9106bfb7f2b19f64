//! # Configuration
//!
//! Settings loaded at startup from defaults and the environment.
//!
//! Environment variables use the `MERCADOFACIL` prefix and `__` to separate
//! nested keys:
//!
//! | Variable                                  | Default  |
//! |-------------------------------------------|----------|
//! | `MERCADOFACIL__LOG__LEVEL`                | `info`   |
//! | `MERCADOFACIL__LOG__FORMAT`               | `pretty` |
//! | `MERCADOFACIL__REPOSITORY__INITIAL_CAPACITY` | `0`   |
//!
//! [`Settings::load`] also reads a `.env` file from the working directory
//! when one exists.

use ::config::{Config, Environment};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MERCADOFACIL";

const ENV_SEPARATOR: &str = "__";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value could not be deserialized.
    #[error("configuration error: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Volatile repository settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// Number of entities each store pre-allocates room for.
    pub initial_capacity: usize,
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Logging.
    pub log: LogSettings,
    /// Repository sizing.
    pub repository: RepositorySettings,
}

impl Settings {
    /// Loads settings from `.env` (if present) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a variable cannot be parsed into its
    /// setting.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::build(Self::environment())
    }

    /// Loads settings from an explicit set of environment variables instead
    /// of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a variable cannot be parsed into its
    /// setting.
    pub fn from_env_map<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: ::config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::build(Self::environment().source(Some(source)))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("log.level", defaults.log.level)?
            .set_default("log.format", "pretty")?
            .set_default("repository.initial_capacity", 0_i64)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_variables() {
        let settings = Settings::from_env_map(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.log.format, LogFormat::Pretty);
        assert_eq!(settings.repository.initial_capacity, 0);
    }

    #[test]
    fn variables_override_defaults() {
        let settings = Settings::from_env_map([
            ("MERCADOFACIL__LOG__LEVEL", "mercadofacil=debug"),
            ("MERCADOFACIL__LOG__FORMAT", "json"),
            ("MERCADOFACIL__REPOSITORY__INITIAL_CAPACITY", "128"),
        ])
        .unwrap();

        assert_eq!(settings.log.level, "mercadofacil=debug");
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.repository.initial_capacity, 128);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let settings = Settings::from_env_map([("OTHER__LOG__FORMAT", "json")]).unwrap();
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_capacity_is_rejected() {
        let result =
            Settings::from_env_map([("MERCADOFACIL__REPOSITORY__INITIAL_CAPACITY", "many")]);
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = Settings::from_env_map([("MERCADOFACIL__LOG__FORMAT", "xml")]);
        assert!(result.is_err());
    }
}
