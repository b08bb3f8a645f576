//! Whole-store save and load against a snapshot file.

use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::ReservationStore;

use super::config::DatabaseConfig;
use super::connection::Database;

/// The result of loading a snapshot file.
#[derive(Debug, Default)]
pub struct LoadedStore {
    /// The loaded reservations, or an empty store if nothing could be read.
    pub store: ReservationStore,
    /// Set when the file existed but could not be read.
    pub warning: Option<String>,
}

/// Loads the store from `path`.
///
/// A missing file yields an empty store with no warning. A file that exists
/// but cannot be read (corrupt, foreign, or written by an incompatible
/// version) also yields an empty store, plus a warning for the operator.
/// The file itself is never touched here.
#[must_use]
pub fn load_or_empty(path: impl AsRef<Path>) -> LoadedStore {
    let path = path.as_ref();
    let loaded = match path.try_exists() {
        Ok(false) => {
            log::debug!("no snapshot at {}, starting empty", path.display());
            return LoadedStore::default();
        }
        Ok(true) => load(path),
        Err(e) => Err(Error::Io(e)),
    };

    match loaded {
        Ok(store) => {
            log::info!("loaded {} reservations from {}", store.len(), path.display());
            LoadedStore {
                store,
                warning: None,
            }
        }
        Err(e) => {
            let warning = format!(
                "could not load reservations from {} ({e}); starting with an empty list",
                path.display()
            );
            log::debug!("{warning}");
            LoadedStore {
                store: ReservationStore::new(),
                warning: Some(warning),
            }
        }
    }
}

fn load(path: &Path) -> Result<ReservationStore> {
    let db = Database::open(DatabaseConfig::new(path).read_only())?;
    db.load_snapshot()
}

/// Writes the full store to `path`, replacing any previous file.
///
/// The snapshot is written to a temporary file in the same directory and
/// renamed into place, so readers only ever see a complete snapshot. A
/// corrupt file at `path` is simply replaced. A replaced file's permissions
/// carry over; a first snapshot is readable by its owner only.
///
/// # Errors
///
/// Returns [`Error::Persistence`] if the directory, the temporary file, the
/// snapshot contents or the final rename cannot be written.
pub fn persist(path: impl AsRef<Path>, store: &ReservationStore) -> Result<()> {
    let path = path.as_ref();
    write_snapshot(path, store).map_err(|e| match e {
        Error::Persistence { .. } => e,
        other => Error::Persistence {
            details: other.to_string(),
        },
    })?;
    log::debug!("persisted {} reservations to {}", store.len(), path.display());
    Ok(())
}

fn write_snapshot(path: &Path, store: &ReservationStore) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let temp = NamedTempFile::new_in(dir)?;
    // A rewrite keeps the access mode of the snapshot it replaces
    match std::fs::metadata(path) {
        Ok(previous) if previous.is_file() => {
            temp.as_file().set_permissions(previous.permissions())?;
        }
        _ => {}
    }
    {
        let mut db = Database::open(DatabaseConfig::new(temp.path()))?;
        db.save_snapshot(store)?;
    }

    temp.persist(path).map_err(|e| Error::Persistence {
        details: format!("cannot replace {}: {}", path.display(), e.error),
    })?;
    Ok(())
}
