//! Opening snapshot files.
//!
//! A snapshot is opened in one of two ways. Writers open (and create) a
//! fresh file and get the schema installed; readers open an existing file
//! read-only and only check that it carries the current schema.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;
use super::migrations::{check_schema_compatibility, verify_schema};

/// An open snapshot file.
///
/// # Examples
///
/// ```no_run
/// use resort::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/reservations.db")).unwrap();
/// assert!(db.load_snapshot().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens the snapshot described by `config`.
    ///
    /// A writable open creates missing parent directories when
    /// `auto_create` is set, turns on full synchronous writes, and installs
    /// the schema into an empty file. A read-only open never creates or
    /// alters anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not a database, or
    /// carries no schema or a schema of another version.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create {
            if let Some(parent) = config.path.parent().filter(|p| !p.exists()) {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(&config.path, open_flags(&config))?;
        conn.busy_timeout(config.busy_timeout)?;

        if config.read_only {
            verify_schema(&conn)?;
        } else {
            conn.execute_batch("PRAGMA synchronous = FULL")?;
            check_schema_compatibility(&conn)?;
        }

        log::trace!(
            "opened snapshot {} ({})",
            config.path.display(),
            if config.read_only { "read-only" } else { "read-write" }
        );
        Ok(Self { conn, config })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the configuration this snapshot was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

fn open_flags(config: &DatabaseConfig) -> OpenFlags {
    let access = match (config.read_only, config.auto_create) {
        (true, _) => OpenFlags::SQLITE_OPEN_READ_ONLY,
        (false, true) => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        (false, false) => OpenFlags::SQLITE_OPEN_READ_WRITE,
    };
    access | OpenFlags::SQLITE_OPEN_NO_MUTEX
}
