//! Database layer for persistent storage of reservations.
//!
//! The whole store is kept in one SQLite file, one row per reservation with
//! a named column per field. Every save writes a complete snapshot to a
//! sibling temporary file and then renames it over the previous one, so a
//! crash mid-write never leaves a half-written file behind.
//!
//! # Examples
//!
//! ```no_run
//! use resort::database::{load_or_empty, persist};
//! use resort::ReservationStore;
//!
//! let loaded = load_or_empty("/tmp/resort/reservations.db");
//! if let Some(warning) = &loaded.warning {
//!     eprintln!("Warning: {warning}");
//! }
//!
//! let store: ReservationStore = loaded.store;
//! persist("/tmp/resort/reservations.db", &store).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod snapshot;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;
pub use snapshot::{load_or_empty, persist, LoadedStore};

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
