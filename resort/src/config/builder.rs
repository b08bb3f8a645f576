//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::default_data_dir;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Precedence (highest to lowest): the explicit data directory, programmatic
/// overrides, environment variables, the user config file, built-in defaults.
///
/// # Examples
///
/// ```
/// use resort::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { currency: Some("USD".to_string()), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.currency(), "USD");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `dir` as the data directory, both for finding `config.yaml` and
    /// as the final `data_dir`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Do not read `config.yaml`.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `RESORT_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layers `config` above files and environment.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Loads, merges and validates the configuration.
    ///
    /// The returned config always has `data_dir` set.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, an
    /// environment variable is invalid, the result fails validation, or no
    /// data directory can be determined.
    pub fn build(self) -> Result<Config> {
        let mut env_layer = Config::default();
        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut env_layer)?;
        }

        let mut config = Config::default();

        if !self.skip_files {
            let lookup_dir = match (&self.data_dir, &env_layer.data_dir) {
                (Some(dir), _) | (None, Some(dir)) => dir.clone(),
                (None, None) => default_data_dir()?,
            };
            if let Some(file) = ConfigLoader::load_user_config(&lookup_dir)? {
                ConfigMerger::merge_into(&mut config, &file);
            }
        }

        ConfigMerger::merge_into(&mut config, &env_layer);
        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir;
        }

        ConfigValidator::validate(&config)?;

        if config.data_dir.is_none() {
            config.data_dir = Some(default_data_dir()?);
        }

        Ok(config)
    }
}
