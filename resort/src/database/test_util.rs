//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Reservation, ReservationRequest, RoomType};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a two-night Double reservation with the given id.
///
/// # Panics
///
/// Panics if the reservation cannot be created.
#[must_use]
pub fn create_test_reservation(id: &str) -> Reservation {
    Reservation::create(ReservationRequest {
        id: id.to_string(),
        guest_name: format!("Guest {id}"),
        address: "12 Lake Road".to_string(),
        contact_number: "0770000000".to_string(),
        room_type: RoomType::Double,
        check_in: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
    })
    .unwrap()
}
