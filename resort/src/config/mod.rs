//! Configuration system for resort.
//!
//! Configuration is layered from the following sources (highest to lowest):
//!
//! 1. An explicit data directory (`ConfigBuilder::with_data_dir`)
//! 2. Programmatic overrides (`ConfigBuilder::with_config`)
//! 3. Environment variables (`RESORT_*`)
//! 4. User config (`<data_dir>/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use resort::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("currency: {}", config.currency());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{AuthConfig, Config, OutputFormat, DEFAULT_CURRENCY};
pub use validator::ConfigValidator;
