//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `RESORT_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// Recognized variables:
/// - `RESORT_DATA_DIR`: the data directory
/// - `RESORT_CURRENCY`: the currency label
/// - `RESORT_OUTPUT_FORMAT`: `table`, `json`, `csv` or `tsv`
///
/// # Examples
///
/// ```no_run
/// use resort::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = Self::non_empty("RESORT_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(currency) = Self::non_empty("RESORT_CURRENCY") {
            config.currency = Some(currency);
        }

        if let Some(format) = Self::non_empty("RESORT_OUTPUT_FORMAT") {
            config.output_format =
                Some(format.parse::<OutputFormat>().map_err(|message| {
                    Error::Validation {
                        field: "RESORT_OUTPUT_FORMAT".into(),
                        message,
                    }
                })?);
        }

        Ok(())
    }

    fn non_empty(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = ["RESORT_DATA_DIR", "RESORT_CURRENCY", "RESORT_OUTPUT_FORMAT"];

    fn clear() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config() {
        clear();
        let mut config = Config {
            currency: Some("EUR".to_string()),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.currency(), "EUR");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear();
        env::set_var("RESORT_DATA_DIR", "/srv/resort");
        env::set_var("RESORT_CURRENCY", "USD");
        env::set_var("RESORT_OUTPUT_FORMAT", "json");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/resort")));
        assert_eq!(config.currency(), "USD");
        assert_eq!(config.output_format, Some(OutputFormat::Json));

        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear();
        env::set_var("RESORT_OUTPUT_FORMAT", "xml");

        let mut config = Config::default();
        let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
        assert!(err.to_string().contains("RESORT_OUTPUT_FORMAT"));

        clear();
    }

    #[test]
    #[serial]
    fn test_empty_values_ignored() {
        clear();
        env::set_var("RESORT_CURRENCY", "  ");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.currency, None);

        clear();
    }
}
