//! Configuration validation.

use crate::config::schema::{AuthConfig, Config};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use resort::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { currency: Some(" ".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank currency or data directory,
    /// or for credentials with an empty user name or password.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref currency) = config.currency {
            if currency.trim().is_empty() {
                return Err(Error::Validation {
                    field: "currency".into(),
                    message: "currency cannot be empty".into(),
                });
            }
        }

        if let Some(ref dir) = config.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_dir".into(),
                    message: "data_dir cannot be empty".into(),
                });
            }
        }

        if let Some(ref auth) = config.auth {
            Self::validate_auth(auth)?;
        }

        Ok(())
    }

    fn validate_auth(auth: &AuthConfig) -> Result<()> {
        if auth.username.is_empty() {
            return Err(Error::Validation {
                field: "auth.username".into(),
                message: "username cannot be empty".into(),
            });
        }
        if auth.password.is_empty() {
            return Err(Error::Validation {
                field: "auth.password".into(),
                message: "password cannot be empty".into(),
            });
        }
        Ok(())
    }
}
