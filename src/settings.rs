//! Runtime settings, layered from defaults and `LIBRARY_*` environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::error_log::DEFAULT_LOG_PATH;

/// Prefix of the environment variables read by [`Settings::load`]
pub const ENV_PREFIX: &str = "LIBRARY";

/// Where the desk keeps its files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Error log path (`LIBRARY_ERROR_LOG`)
    pub error_log: PathBuf,
    /// Optional JSON seed catalog (`LIBRARY_CATALOG`); the built-in seed otherwise
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { error_log: PathBuf::from(DEFAULT_LOG_PATH), catalog: None }
    }
}

impl Settings {
    /// Load settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable cannot be deserialized.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings from an explicit environment source
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable cannot be deserialized.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .set_default("error_log", DEFAULT_LOG_PATH)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Environment source backed by a fixed map instead of the process env
    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_apply_without_variables() {
        let settings = Settings::from_environment(env_of(&[]));
        assert_eq!(settings.ok(), Some(Settings::default()));
    }

    #[test]
    fn variables_override_defaults() {
        let settings = Settings::from_environment(env_of(&[
            ("LIBRARY_ERROR_LOG", "/tmp/desk-errors.txt"),
            ("LIBRARY_CATALOG", "/srv/catalog.json"),
        ]));
        assert_eq!(
            settings.ok(),
            Some(Settings {
                error_log: PathBuf::from("/tmp/desk-errors.txt"),
                catalog: Some(PathBuf::from("/srv/catalog.json")),
            })
        );
    }
}
