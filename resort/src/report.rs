//! Aggregate reports over the store.
//!
//! Every report is computed from scratch on each call, using the status
//! each reservation has on the given day. Revenue always sums the stored
//! snapshot costs, cancelled reservations included.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Reservation, RoomType, Status};

/// Number of reservations in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Reservations that have not started.
    pub upcoming: usize,
    /// Reservations in progress.
    pub active: usize,
    /// Reservations past their check-out date.
    pub completed: usize,
    /// Reservations checked out by staff.
    pub checked_out: usize,
    /// Reservations cancelled by staff.
    pub cancelled: usize,
}

impl StatusCounts {
    /// Returns the count for one status.
    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::Upcoming => self.upcoming,
            Status::Active => self.active,
            Status::Completed => self.completed,
            Status::CheckedOut => self.checked_out,
            Status::Cancelled => self.cancelled,
        }
    }

    fn increment(&mut self, status: Status) {
        let slot = match status {
            Status::Upcoming => &mut self.upcoming,
            Status::Active => &mut self.active,
            Status::Completed => &mut self.completed,
            Status::CheckedOut => &mut self.checked_out,
            Status::Cancelled => &mut self.cancelled,
        };
        *slot += 1;
    }
}

/// Overall figures: totals, status breakdown, bookings per room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Number of reservations.
    pub total_reservations: usize,
    /// Reservations per status.
    pub status_counts: StatusCounts,
    /// Sum of all snapshot costs.
    pub total_revenue: i64,
    /// Bookings per room type, every type listed in fixed order.
    pub room_counts: Vec<(RoomType, usize)>,
}

/// Bookings and revenue for one room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomStats {
    /// The room type.
    pub room_type: RoomType,
    /// Number of reservations of this type.
    pub bookings: usize,
    /// Sum of their snapshot costs.
    pub revenue: i64,
    /// `revenue / bookings` rounded down, or 0 without bookings.
    pub average_cost: i64,
}

/// Per-room-type breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAnalysis {
    /// One entry per room type, in fixed order.
    pub rooms: Vec<RoomStats>,
}

/// Count and revenue for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStats {
    /// The status.
    pub status: Status,
    /// Number of reservations currently in it.
    pub count: usize,
    /// Sum of their snapshot costs.
    pub revenue: i64,
}

/// Per-status breakdown with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// One entry per status, in fixed order.
    pub rows: Vec<StatusStats>,
    /// Number of reservations.
    pub total_count: usize,
    /// Sum of every row's revenue.
    pub total_revenue: i64,
}

/// The three headline figures shown on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Number of reservations.
    pub total_bookings: usize,
    /// Reservations active today.
    pub active_bookings: usize,
    /// Sum of all snapshot costs.
    pub total_revenue: i64,
}

/// Builds the summary report.
pub fn summary<'a, I>(reservations: I, today: NaiveDate) -> SummaryReport
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut status_counts = StatusCounts::default();
    let mut room_counts: Vec<(RoomType, usize)> = RoomType::ALL.iter().map(|&t| (t, 0)).collect();
    let mut total_reservations = 0;
    let mut total_revenue = 0;

    for reservation in reservations {
        total_reservations += 1;
        total_revenue += reservation.total_cost();
        status_counts.increment(reservation.current_status(today));
        if let Some((_, count)) = room_counts
            .iter_mut()
            .find(|(room_type, _)| *room_type == reservation.room_type())
        {
            *count += 1;
        }
    }

    SummaryReport {
        total_reservations,
        status_counts,
        total_revenue,
        room_counts,
    }
}

/// Builds the per-room-type report.
///
/// The room type and cost of a reservation never change, so this report
/// does not depend on the date.
pub fn room_analysis<'a, I>(reservations: I) -> RoomAnalysis
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut rooms: Vec<RoomStats> = RoomType::ALL
        .iter()
        .map(|&room_type| RoomStats {
            room_type,
            bookings: 0,
            revenue: 0,
            average_cost: 0,
        })
        .collect();

    for reservation in reservations {
        if let Some(stats) = rooms
            .iter_mut()
            .find(|s| s.room_type == reservation.room_type())
        {
            stats.bookings += 1;
            stats.revenue += reservation.total_cost();
        }
    }

    for stats in &mut rooms {
        if let Ok(bookings) = i64::try_from(stats.bookings) {
            if bookings > 0 {
                stats.average_cost = stats.revenue / bookings;
            }
        }
    }

    RoomAnalysis { rooms }
}

/// Builds the per-status report.
pub fn status_report<'a, I>(reservations: I, today: NaiveDate) -> StatusReport
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut rows: Vec<StatusStats> = Status::ALL
        .iter()
        .map(|&status| StatusStats {
            status,
            count: 0,
            revenue: 0,
        })
        .collect();

    for reservation in reservations {
        let status = reservation.current_status(today);
        if let Some(row) = rows.iter_mut().find(|row| row.status == status) {
            row.count += 1;
            row.revenue += reservation.total_cost();
        }
    }

    StatusReport {
        total_count: rows.iter().map(|row| row.count).sum(),
        total_revenue: rows.iter().map(|row| row.revenue).sum(),
        rows,
    }
}

/// Builds the dashboard figures.
pub fn dashboard<'a, I>(reservations: I, today: NaiveDate) -> DashboardStats
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut stats = DashboardStats {
        total_bookings: 0,
        active_bookings: 0,
        total_revenue: 0,
    };
    for reservation in reservations {
        stats.total_bookings += 1;
        stats.total_revenue += reservation.total_cost();
        if reservation.current_status(today) == Status::Active {
            stats.active_bookings += 1;
        }
    }
    stats
}
