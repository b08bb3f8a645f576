//! The shared operator login gate.

use crate::config::{AuthConfig, Config};
use crate::error::{Error, Result};

/// Checks presented credentials against the configured operator account.
///
/// # Examples
///
/// ```
/// use resort::config::AuthConfig;
/// use resort::OperatorGate;
///
/// let gate = OperatorGate::new(AuthConfig {
///     username: "admin".to_string(),
///     password: "123".to_string(),
/// });
/// assert!(gate.verify("admin", "123").is_ok());
/// assert!(gate.verify("admin", "1234").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OperatorGate {
    credentials: AuthConfig,
}

impl OperatorGate {
    /// Creates a gate for the given account.
    #[must_use]
    pub const fn new(credentials: AuthConfig) -> Self {
        Self { credentials }
    }

    /// Returns a gate if `config` has an `auth` section, `None` otherwise.
    #[must_use]
    pub fn from_config(config: &Config) -> Option<Self> {
        config.auth.clone().map(Self::new)
    }

    /// Verifies a user name and password. Both must match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailed`] on any mismatch, without
    /// saying which part was wrong.
    pub fn verify(&self, username: &str, password: &str) -> Result<()> {
        let user_ok = constant_time_eq(username.as_bytes(), self.credentials.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.credentials.password.as_bytes());
        if user_ok && pass_ok {
            log::debug!("operator '{username}' authenticated");
            Ok(())
        } else {
            log::warn!("failed login attempt for operator '{username}'");
            Err(Error::AuthenticationFailed)
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> OperatorGate {
        OperatorGate::new(AuthConfig {
            username: "admin".to_string(),
            password: "123".to_string(),
        })
    }

    #[test]
    fn test_correct_credentials() {
        gate().verify("admin", "123").unwrap();
    }

    #[test]
    fn test_wrong_credentials() {
        assert!(matches!(
            gate().verify("admin", "12"),
            Err(Error::AuthenticationFailed)
        ));
        assert!(gate().verify("root", "123").is_err());
        assert!(gate().verify("", "").is_err());
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(gate().verify(" admin", "123").is_err());
        assert!(gate().verify("Admin", "123").is_err());
        assert!(gate().verify("admin", "123 ").is_err());
    }

    #[test]
    fn test_from_config() {
        assert!(OperatorGate::from_config(&Config::default()).is_none());

        let config = Config {
            auth: Some(AuthConfig {
                username: "a".to_string(),
                password: "b".to_string(),
            }),
            ..Default::default()
        };
        assert!(OperatorGate::from_config(&config).is_some());
    }
}
