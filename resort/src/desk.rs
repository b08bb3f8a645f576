//! The front desk: every operation a front end can invoke.
//!
//! [`FrontDesk`] owns the store and writes a complete snapshot after every
//! mutation. A failed write never undoes the change in memory; it comes
//! back as a warning in the [`Outcome`] so the operator can be told that
//! the file on disk is behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::auth::OperatorGate;
use crate::config::Config;
use crate::database::{default_data_dir, load_or_empty, persist, DatabaseConfig};
use crate::error::Result;
use crate::invoice::Invoice;
use crate::report::{self, DashboardStats, RoomAnalysis, StatusReport, SummaryReport};
use crate::status::{check_transition, ManualStatus};
use crate::{search, Reservation, ReservationRequest, ReservationStore};

/// The result of a mutation, with any warnings raised while persisting it.
#[derive(Debug)]
pub struct Outcome<T> {
    /// What the operation produced.
    pub value: T,
    /// Problems that did not stop the operation.
    pub warnings: Vec<String>,
}

/// The command surface over one reservation store.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resort::config::Config;
/// use resort::{FrontDesk, ManualStatus, ReservationRequest, RoomType, Status};
///
/// let mut desk = FrontDesk::in_memory(Config::default());
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// desk.create_reservation(ReservationRequest {
///     id: "R1".to_string(),
///     guest_name: "Alice".to_string(),
///     address: String::new(),
///     contact_number: "555".to_string(),
///     room_type: RoomType::Single,
///     check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
/// })
/// .unwrap();
///
/// let cancelled = desk.set_manual_status("R1", ManualStatus::Cancelled, today).unwrap();
/// assert_eq!(cancelled.value.current_status(today), Status::Cancelled);
/// ```
#[derive(Debug)]
pub struct FrontDesk {
    store: ReservationStore,
    snapshot_path: Option<PathBuf>,
    config: Config,
    startup_warning: Option<String>,
}

impl FrontDesk {
    /// Opens the store kept in the configured data directory.
    ///
    /// An unreadable snapshot does not fail the open; the desk starts empty
    /// and [`Self::startup_warning`] says why.
    ///
    /// # Errors
    ///
    /// Returns an error only if no data directory is configured and the home
    /// directory cannot be determined.
    pub fn open(config: Config) -> Result<Self> {
        let data_dir = match config.data_dir.clone() {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let snapshot_path = DatabaseConfig::in_data_dir(&data_dir).path;
        let loaded = load_or_empty(&snapshot_path);

        Ok(Self {
            store: loaded.store,
            snapshot_path: Some(snapshot_path),
            config,
            startup_warning: loaded.warning,
        })
    }

    /// Creates an empty desk that never touches the disk.
    #[must_use]
    pub fn in_memory(config: Config) -> Self {
        Self {
            store: ReservationStore::new(),
            snapshot_path: None,
            config,
            startup_warning: None,
        }
    }

    /// The warning raised while loading the snapshot, if any.
    #[must_use]
    pub fn startup_warning(&self) -> Option<&str> {
        self.startup_warning.as_deref()
    }

    /// The effective configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Where snapshots are written, or `None` for an in-memory desk.
    #[must_use]
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &ReservationStore {
        &self.store
    }

    /// Checks operator credentials when a login gate is configured.
    ///
    /// Without an `auth` section every caller is let through, which is
    /// logged at info level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AuthenticationFailed`] if a gate is configured
    /// and the credentials are missing or wrong.
    pub fn verify_operator(&self, username: Option<&str>, password: Option<&str>) -> Result<()> {
        match OperatorGate::from_config(&self.config) {
            Some(gate) => gate.verify(username.unwrap_or_default(), password.unwrap_or_default()),
            None => {
                log::info!("no operator login is configured; running without one");
                Ok(())
            }
        }
    }

    /// Validates and stores a new reservation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input or [`crate::Error::DuplicateId`]
    /// if the id is taken. The store is unchanged in either case.
    pub fn create_reservation(
        &mut self,
        request: ReservationRequest,
    ) -> Result<Outcome<&Reservation>> {
        let reservation = Reservation::create(request)?;
        let id = reservation.id().to_string();
        self.store.insert(reservation)?;
        log::info!("created reservation {id}");

        let warnings = self.save();
        Ok(Outcome {
            value: self.store.get(&id)?,
            warnings,
        })
    }

    /// Removes a reservation whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id.
    pub fn delete_reservation(&mut self, id: &str) -> Result<Outcome<Reservation>> {
        let removed = self.store.delete(id)?;
        log::info!("deleted reservation {id}");

        Ok(Outcome {
            value: removed,
            warnings: self.save(),
        })
    }

    /// Applies a staff action after checking it against the status on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id, or
    /// [`crate::Error::IllegalTransition`] if the action is not allowed now.
    /// The reservation is untouched on error.
    pub fn set_manual_status(
        &mut self,
        id: &str,
        status: ManualStatus,
        today: NaiveDate,
    ) -> Result<Outcome<&Reservation>> {
        let current = self.store.get(id)?.current_status(today);
        check_transition(current, status)?;

        self.store.get_mut(id)?.apply_manual_status(status);
        log::info!("reservation {id}: {current} -> {status}");

        let warnings = self.save();
        Ok(Outcome {
            value: self.store.get(id)?,
            warnings,
        })
    }

    /// Checks a guest out.
    ///
    /// # Errors
    ///
    /// See [`Self::set_manual_status`].
    pub fn check_out(&mut self, id: &str, today: NaiveDate) -> Result<Outcome<&Reservation>> {
        self.set_manual_status(id, ManualStatus::CheckedOut, today)
    }

    /// Cancels a reservation.
    ///
    /// # Errors
    ///
    /// See [`Self::set_manual_status`].
    pub fn cancel(&mut self, id: &str, today: NaiveDate) -> Result<Outcome<&Reservation>> {
        self.set_manual_status(id, ManualStatus::Cancelled, today)
    }

    /// Looks up one reservation.
    #[must_use]
    pub fn get_reservation(&self, id: &str) -> Option<&Reservation> {
        self.store.get(id).ok()
    }

    /// Every reservation, ordered by id.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Reservation> {
        self.store.all()
    }

    /// Reservations whose table row contains `query`, ordered by id.
    #[must_use]
    pub fn filter(&self, query: &str, today: NaiveDate) -> Vec<&Reservation> {
        search::filter(query, self.store.all(), today)
    }

    /// See [`report::summary`].
    #[must_use]
    pub fn summary_report(&self, today: NaiveDate) -> SummaryReport {
        report::summary(self.store.all(), today)
    }

    /// See [`report::room_analysis`].
    #[must_use]
    pub fn room_analysis_report(&self) -> RoomAnalysis {
        report::room_analysis(self.store.all())
    }

    /// See [`report::status_report`].
    #[must_use]
    pub fn status_report(&self, today: NaiveDate) -> StatusReport {
        report::status_report(self.store.all(), today)
    }

    /// See [`report::dashboard`].
    #[must_use]
    pub fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        report::dashboard(self.store.all(), today)
    }

    /// Builds the invoice for one reservation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id.
    pub fn invoice(&self, id: &str, today: NaiveDate) -> Result<Invoice> {
        Ok(Invoice::for_reservation(self.store.get(id)?, today))
    }

    /// Writes the snapshot now. A no-op for an in-memory desk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Persistence`] if the write fails.
    pub fn persist(&self) -> Result<()> {
        match &self.snapshot_path {
            Some(path) => persist(path, &self.store),
            None => Ok(()),
        }
    }

    fn save(&self) -> Vec<String> {
        match self.persist() {
            Ok(()) => Vec::new(),
            Err(e) => {
                log::debug!("snapshot write failed: {e}");
                vec![format!("{e}; the change is kept in memory only")]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::database::DATABASE_FILE_NAME;
    use crate::{Error, RoomType, Status};
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(id: &str) -> ReservationRequest {
        ReservationRequest {
            id: id.to_string(),
            guest_name: "Alice".to_string(),
            address: String::new(),
            contact_number: "555".to_string(),
            room_type: RoomType::Double,
            check_in: date(2025, 1, 10),
            check_out: date(2025, 1, 12),
        }
    }

    fn config_in(dir: &Path) -> Config {
        Config {
            data_dir: Some(dir.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut desk = FrontDesk::in_memory(Config::default());
        let outcome = desk.create_reservation(request("R1")).unwrap();
        assert_eq!(outcome.value.total_cost(), 24_000);
        assert!(outcome.warnings.is_empty());
        assert!(desk.get_reservation("R1").is_some());
        assert!(desk.get_reservation("R2").is_none());
    }

    #[test]
    fn test_duplicate_leaves_original() {
        let mut desk = FrontDesk::in_memory(Config::default());
        desk.create_reservation(request("R1")).unwrap();

        let mut second = request("R1");
        second.guest_name = "Mallory".to_string();
        let err = desk.create_reservation(second).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { .. }));
        assert_eq!(desk.get_reservation("R1").unwrap().guest_name(), "Alice");
    }

    #[test]
    fn test_illegal_transition_leaves_reservation() {
        let mut desk = FrontDesk::in_memory(Config::default());
        desk.create_reservation(request("R1")).unwrap();

        let err = desk.check_out("R1", date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, Error::IllegalTransition { .. }));
        assert_eq!(desk.get_reservation("R1").unwrap().manual_status(), None);
    }

    #[test]
    fn test_check_out_active() {
        let mut desk = FrontDesk::in_memory(Config::default());
        desk.create_reservation(request("R1")).unwrap();

        let today = date(2025, 1, 11);
        let outcome = desk.check_out("R1", today).unwrap();
        assert_eq!(outcome.value.current_status(today), Status::CheckedOut);
        assert!(desk.cancel("R1", today).is_err());
    }

    #[test]
    fn test_unknown_id() {
        let mut desk = FrontDesk::in_memory(Config::default());
        let today = date(2025, 1, 1);
        assert!(desk.cancel("nope", today).unwrap_err().is_not_found());
        assert!(desk.delete_reservation("nope").unwrap_err().is_not_found());
        assert!(desk.invoice("nope", today).unwrap_err().is_not_found());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let dir = tempdir().unwrap();
        {
            let mut desk = FrontDesk::open(config_in(dir.path())).unwrap();
            assert!(desk.startup_warning().is_none());
            desk.create_reservation(request("R1")).unwrap();
            desk.create_reservation(request("R2")).unwrap();
            desk.cancel("R2", date(2025, 1, 1)).unwrap();
            desk.delete_reservation("R1").unwrap();
        }

        let desk = FrontDesk::open(config_in(dir.path())).unwrap();
        let all = desk.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].manual_status(), Some(ManualStatus::Cancelled));
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty_with_warning() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DATABASE_FILE_NAME), b"garbage").unwrap();

        let desk = FrontDesk::open(config_in(dir.path())).unwrap();
        assert!(desk.list_all().is_empty());
        assert!(desk.startup_warning().is_some());
    }

    #[test]
    fn test_failed_write_keeps_change_and_warns() {
        let dir = tempdir().unwrap();
        // A directory where the snapshot file should be makes the rename fail
        std::fs::create_dir(dir.path().join(DATABASE_FILE_NAME)).unwrap();

        let mut desk = FrontDesk::open(config_in(dir.path())).unwrap();
        let outcome = desk.create_reservation(request("R1")).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert!(desk.get_reservation("R1").is_some());
    }

    #[test]
    fn test_verify_operator() {
        let open = FrontDesk::in_memory(Config::default());
        open.verify_operator(None, None).unwrap();

        let gated = FrontDesk::in_memory(Config {
            auth: Some(AuthConfig {
                username: "admin".to_string(),
                password: "123".to_string(),
            }),
            ..Default::default()
        });
        gated.verify_operator(Some("admin"), Some("123")).unwrap();
        assert!(gated.verify_operator(None, None).is_err());
        assert!(gated.verify_operator(Some("admin"), Some("x")).is_err());
    }

    #[test]
    fn test_filter_and_reports() {
        let mut desk = FrontDesk::in_memory(Config::default());
        desk.create_reservation(request("R1")).unwrap();
        let mut bob = request("R2");
        bob.guest_name = "Bob".to_string();
        bob.room_type = RoomType::Suite;
        desk.create_reservation(bob).unwrap();

        let today = date(2025, 1, 11);
        assert_eq!(desk.filter("bob", today).len(), 1);
        assert_eq!(desk.filter(" ", today).len(), 2);
        assert_eq!(desk.summary_report(today).total_revenue, 24_000 + 40_000);
        assert_eq!(desk.dashboard(today).active_bookings, 2);
        assert_eq!(desk.status_report(today).total_count, 2);
        assert_eq!(desk.room_analysis_report().rooms[2].bookings, 1);
    }
}
