//! Configuration schema definitions.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currency label used when none is configured.
pub const DEFAULT_CURRENCY: &str = "LKR";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to the built-in defaults.
///
/// # Examples
///
/// ```
/// use resort::config::Config;
///
/// let config: Config = serde_yaml::from_str("currency: USD\n").unwrap();
/// assert_eq!(config.currency(), "USD");
/// assert_eq!(Config::default().currency(), "LKR");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the reservation snapshot.
    pub data_dir: Option<PathBuf>,

    /// Currency label printed next to amounts.
    pub currency: Option<String>,

    /// Operator credentials. The login gate is only active when set.
    pub auth: Option<AuthConfig>,

    /// Default output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured currency label, or [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

/// The shared operator credentials.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Operator user name.
    pub username: String,
    /// Operator password.
    pub password: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Output format for list-like commands.
///
/// # Examples
///
/// ```
/// use resort::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
