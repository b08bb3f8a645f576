//! Guest invoices.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::search::{format_cost, format_date};
use crate::{Reservation, RoomType, Status};

/// The billing view of one reservation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resort::{Invoice, Reservation, ReservationRequest, RoomType};
///
/// let r = Reservation::create(ReservationRequest {
///     id: "R7".to_string(),
///     guest_name: "Dana".to_string(),
///     address: String::new(),
///     contact_number: "555".to_string(),
///     room_type: RoomType::Double,
///     check_in: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 4, 4).unwrap(),
/// })
/// .unwrap();
///
/// let invoice = Invoice::for_reservation(&r, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
/// assert_eq!(invoice.rate_per_night, 12_000);
/// assert!(invoice.render_text("LKR").contains("Total Amount: 36,000 LKR"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    /// Reservation id.
    pub reservation_id: String,
    /// Guest name.
    pub guest_name: String,
    /// Guest address (may be empty).
    pub address: String,
    /// Guest contact number.
    pub contact_number: String,
    /// Booked room type.
    pub room_type: RoomType,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Nights charged.
    pub nights: i64,
    /// Price of one night, derived from the snapshot cost.
    pub rate_per_night: i64,
    /// Snapshot total cost.
    pub total: i64,
    /// Status on the invoice date.
    pub status: Status,
}

impl Invoice {
    /// Builds the invoice for `reservation` as of `today`.
    #[must_use]
    pub fn for_reservation(reservation: &Reservation, today: NaiveDate) -> Self {
        Self {
            reservation_id: reservation.id().to_string(),
            guest_name: reservation.guest_name().to_string(),
            address: reservation.address().to_string(),
            contact_number: reservation.contact_number().to_string(),
            room_type: reservation.room_type(),
            check_in: reservation.check_in(),
            check_out: reservation.check_out(),
            nights: reservation.nights(),
            rate_per_night: reservation.rate_per_night(),
            total: reservation.total_cost(),
            status: reservation.current_status(today),
        }
    }

    /// Renders the invoice as plain text with amounts labelled in `currency`.
    #[must_use]
    pub fn render_text(&self, currency: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Guest Invoice");
        let _ = writeln!(out, "=============");
        let mut line = |label: &str, value: &str| {
            let _ = writeln!(out, "{:<18}{value}", format!("{label}:"));
        };
        line("Reservation ID", &self.reservation_id);
        line("Guest Name", &self.guest_name);
        if !self.address.is_empty() {
            line("Address", &self.address);
        }
        line("Contact", &self.contact_number);
        line("Room Type", self.room_type.as_str());
        line("Check-In", &format_date(self.check_in));
        line("Check-Out", &format_date(self.check_out));
        line("Number of Nights", &self.nights.to_string());
        line(
            "Rate per Night",
            &format!("{} {currency}", format_cost(self.rate_per_night)),
        );
        line("Status", self.status.as_str());
        let _ = writeln!(out);
        let _ = writeln!(out, "Total Amount: {} {currency}", format_cost(self.total));
        out
    }
}
