//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the resort library.

use std::path::Path;

use chrono::NaiveDate;
use resort::config::Config;
use resort::{Reservation, ReservationRequest, RoomType};

/// Shorthand for a calendar date.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A config that keeps everything inside `dir` and reads nothing else.
#[allow(dead_code)]
pub fn config_in(dir: &Path) -> Config {
    Config {
        data_dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

/// Builder for creating test reservations with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ReservationFixture;
/// let reservation = ReservationFixture::new()
///     .with_id("R42")
///     .with_room(RoomType::Suite)
///     .build();
/// ```
#[allow(dead_code)]
pub struct ReservationFixture {
    id: String,
    guest_name: String,
    address: String,
    contact_number: String,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[allow(dead_code)]
impl ReservationFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - id: "R1"
    /// - guest: "Test Guest", contact "0770000000", no address
    /// - room: Single
    /// - stay: 2025-01-10 to 2025-01-15 (5 nights)
    pub fn new() -> Self {
        Self {
            id: "R1".to_string(),
            guest_name: "Test Guest".to_string(),
            address: String::new(),
            contact_number: "0770000000".to_string(),
            room_type: RoomType::Single,
            check_in: date(2025, 1, 10),
            check_out: date(2025, 1, 15),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_guest(mut self, name: &str) -> Self {
        self.guest_name = name.to_string();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_contact(mut self, contact: &str) -> Self {
        self.contact_number = contact.to_string();
        self
    }

    pub fn with_room(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn with_stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Returns the raw request without validating it.
    pub fn request(self) -> ReservationRequest {
        ReservationRequest {
            id: self.id,
            guest_name: self.guest_name,
            address: self.address,
            contact_number: self.contact_number,
            room_type: self.room_type,
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    /// Builds the reservation.
    ///
    /// # Panics
    ///
    /// Panics if the request does not validate.
    pub fn build(self) -> Reservation {
        Reservation::create(self.request()).unwrap()
    }
}

impl Default for ReservationFixture {
    fn default() -> Self {
        Self::new()
    }
}
