//! Table rows and free-text search.
//!
//! Search matches against the same text the operator sees in the
//! reservations table, so a reservation is found by anything visible in
//! its row, including the computed status and the formatted cost.

use chrono::NaiveDate;
use serde::Serialize;

use crate::Reservation;

/// One reservation rendered as the eight table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// Reservation id.
    pub id: String,
    /// Guest name.
    pub guest_name: String,
    /// Room type display name.
    pub room_type: String,
    /// Check-in date, `YYYY-MM-DD`.
    pub check_in: String,
    /// Check-out date, `YYYY-MM-DD`.
    pub check_out: String,
    /// Nights charged.
    pub nights: String,
    /// Status display string on the reference date.
    pub status: String,
    /// Total cost, comma grouped.
    pub cost: String,
}

impl DisplayRow {
    /// Column headers, in table order.
    pub const HEADERS: [&'static str; 8] = [
        "ID",
        "Guest Name",
        "Room Type",
        "Check-In",
        "Check-Out",
        "Nights",
        "Status",
        "Total Cost",
    ];

    /// Renders `reservation` as it appears on `today`.
    #[must_use]
    pub fn from_reservation(reservation: &Reservation, today: NaiveDate) -> Self {
        Self {
            id: reservation.id().to_string(),
            guest_name: reservation.guest_name().to_string(),
            room_type: reservation.room_type().to_string(),
            check_in: format_date(reservation.check_in()),
            check_out: format_date(reservation.check_out()),
            nights: reservation.nights().to_string(),
            status: reservation.current_status(today).to_string(),
            cost: format_cost(reservation.total_cost()),
        }
    }

    /// Returns the columns in table order.
    #[must_use]
    pub fn columns(&self) -> [&str; 8] {
        [
            &self.id,
            &self.guest_name,
            &self.room_type,
            &self.check_in,
            &self.check_out,
            &self.nights,
            &self.status,
            &self.cost,
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.columns()
            .iter()
            .any(|column| column.to_lowercase().contains(needle))
    }
}

/// Formats a date the way every table and report shows it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats an amount with comma thousands separators.
///
/// # Examples
///
/// ```
/// use resort::search::format_cost;
///
/// assert_eq!(format_cost(40_000), "40,000");
/// assert_eq!(format_cost(950), "950");
/// assert_eq!(format_cost(-1_200_000), "-1,200,000");
/// ```
#[must_use]
pub fn format_cost(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Returns the reservations whose rendered row contains `query`.
///
/// Matching is case-insensitive. A query that is empty or only whitespace
/// returns every reservation. Input order is preserved.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resort::search::filter;
/// use resort::{Reservation, ReservationRequest, RoomType};
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let r = Reservation::create(ReservationRequest {
///     id: "R1".to_string(),
///     guest_name: "Alice".to_string(),
///     address: String::new(),
///     contact_number: "555".to_string(),
///     room_type: RoomType::Suite,
///     check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
/// })
/// .unwrap();
///
/// assert_eq!(filter("SUITE", [&r], today).len(), 1);
/// assert_eq!(filter("upcoming", [&r], today).len(), 1);
/// assert!(filter("Bob", [&r], today).is_empty());
/// ```
pub fn filter<'a, I>(query: &str, reservations: I, today: NaiveDate) -> Vec<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    if query.trim().is_empty() {
        return reservations.into_iter().collect();
    }

    let needle = query.to_lowercase();
    reservations
        .into_iter()
        .filter(|r| DisplayRow::from_reservation(r, today).matches(&needle))
        .collect()
}
