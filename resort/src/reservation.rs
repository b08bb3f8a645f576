//! Reservation entity, creation validation, and cost derivation.
//!
//! A reservation is created once from a [`ReservationRequest`] and never
//! edited afterwards. Its cost is computed at creation and kept as a
//! snapshot; its status is derived on demand (see [`crate::status`]).

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::room::RoomType;
use crate::status::{derive_status, ManualStatus, Status};

#[cfg(test)]
mod proptests;

/// Raw operator input for a new reservation.
///
/// Text fields are taken as typed; [`Reservation::create`] trims them.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resort::{ReservationRequest, RoomType};
///
/// let request = ReservationRequest {
///     id: "R1".to_string(),
///     guest_name: "Alice".to_string(),
///     address: String::new(),
///     contact_number: "0771234567".to_string(),
///     room_type: RoomType::Double,
///     check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
/// };
/// assert!(request.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// Caller-assigned reservation id.
    pub id: String,
    /// Guest name.
    pub guest_name: String,
    /// Guest address (optional, may be empty).
    pub address: String,
    /// Guest contact number.
    pub contact_number: String,
    /// Booked room type.
    pub room_type: RoomType,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
}

impl ReservationRequest {
    /// Returns every violation in the request, in form order.
    ///
    /// An empty vector means the request is valid. Uniqueness of the id is
    /// not checked here; only the store can decide that.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push(FieldError::new("id", "Reservation ID is required"));
        }
        if self.guest_name.trim().is_empty() {
            errors.push(FieldError::new("guest_name", "Guest Name is required"));
        }
        if self.contact_number.trim().is_empty() {
            errors.push(FieldError::new(
                "contact_number",
                "Contact Number is required",
            ));
        }
        if self.check_out <= self.check_in {
            errors.push(FieldError::new(
                "check_out",
                "Check-out date must be after check-in date",
            ));
        }

        errors
    }
}

/// A hotel reservation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resort::{Reservation, ReservationRequest, RoomType, Status};
///
/// let request = ReservationRequest {
///     id: "R1".to_string(),
///     guest_name: "Alice".to_string(),
///     address: "1 Beach Road".to_string(),
///     contact_number: "0771234567".to_string(),
///     room_type: RoomType::Suite,
///     check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
/// };
/// let reservation = Reservation::create(request).unwrap();
///
/// assert_eq!(reservation.nights(), 5);
/// assert_eq!(reservation.total_cost(), 100_000);
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(reservation.current_status(today), Status::Upcoming);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: String,
    guest_name: String,
    address: String,
    contact_number: String,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_cost: i64,
    manual_status: Option<ManualStatus>,
}

impl Reservation {
    /// Validates the request and creates the reservation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] for the first violation reported
    /// by [`ReservationRequest::validate`].
    pub fn create(request: ReservationRequest) -> Result<Self> {
        if let Some(first) = request.validate().into_iter().next() {
            return Err(first.into());
        }

        let nights = nights_between(request.check_in, request.check_out);
        Ok(Self {
            id: request.id.trim().to_string(),
            guest_name: request.guest_name.trim().to_string(),
            address: request.address.trim().to_string(),
            contact_number: request.contact_number.trim().to_string(),
            room_type: request.room_type,
            check_in: request.check_in,
            check_out: request.check_out,
            total_cost: nights * request.room_type.nightly_rate(),
            manual_status: None,
        })
    }

    /// Rebuilds a reservation exactly as it was stored.
    ///
    /// No creation validation runs and the stored cost is kept even if the
    /// rate table has changed since.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn restore(
        id: String,
        guest_name: String,
        address: String,
        contact_number: String,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_cost: i64,
        manual_status: Option<ManualStatus>,
    ) -> Self {
        Self {
            id,
            guest_name,
            address,
            contact_number,
            room_type,
            check_in,
            check_out,
            total_cost,
            manual_status,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the guest name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the guest address (may be empty).
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the guest contact number.
    #[must_use]
    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    /// Returns the booked room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights charged, never less than one.
    #[must_use]
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }

    /// Returns the cost computed when the reservation was created.
    #[must_use]
    pub const fn total_cost(&self) -> i64 {
        self.total_cost
    }

    /// Returns the per-night price implied by the snapshot cost.
    #[must_use]
    pub fn rate_per_night(&self) -> i64 {
        self.total_cost / self.nights()
    }

    /// Returns the manual override, if staff set one.
    #[must_use]
    pub const fn manual_status(&self) -> Option<ManualStatus> {
        self.manual_status
    }

    /// Returns the status on `today`.
    #[must_use]
    pub fn current_status(&self, today: NaiveDate) -> Status {
        derive_status(self.check_in, self.check_out, self.manual_status, today)
    }

    /// Overwrites the manual override.
    ///
    /// This does not check legality; callers go through
    /// [`crate::status::check_transition`] first.
    pub fn apply_manual_status(&mut self, status: ManualStatus) {
        self.manual_status = Some(status);
    }
}

fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    check_out.signed_duration_since(check_in).num_days().max(1)
}

/// A single validation failure on a request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}
