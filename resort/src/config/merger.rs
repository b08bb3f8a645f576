//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers.
///
/// # Examples
///
/// ```
/// use resort::config::{Config, ConfigMerger};
///
/// let mut result = Config { currency: Some("LKR".to_string()), ..Default::default() };
/// let high = Config { currency: Some("USD".to_string()), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.currency(), "USD");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced as a whole when the source sets it; the
    /// credentials in `auth` are never merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }

        if source.currency.is_some() {
            target.currency.clone_from(&source.currency);
        }

        if source.auth.is_some() {
            target.auth.clone_from(&source.auth);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
