//! Reservation lifecycle: derived status and manual transitions.
//!
//! A reservation's status is never stored for the date-based cases. It is
//! computed on every query from the stay dates and the date the caller
//! passes in. Only the two staff actions, check-out and cancellation, are
//! stored, and once stored they fix the status for good.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use resort::status::{derive_status, Status};
//!
//! let check_in = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
//!
//! assert_eq!(derive_status(check_in, check_out, None, today), Status::Active);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The status a reservation shows to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Check-in date is still in the future.
    Upcoming,
    /// The guest is within the stay window.
    Active,
    /// The check-out date has been reached without a manual check-out.
    Completed,
    /// Staff checked the guest out.
    #[serde(rename = "Checked-Out")]
    CheckedOut,
    /// Staff cancelled the reservation.
    Cancelled,
}

impl Status {
    /// Every status, in the order reports list them.
    pub const ALL: [Self; 5] = [
        Self::Upcoming,
        Self::Active,
        Self::Completed,
        Self::CheckedOut,
        Self::Cancelled,
    ];

    /// Returns the display string shown in tables and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::CheckedOut => "Checked-Out",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns `true` for the statuses set by a staff action.
    ///
    /// No transition is legal out of a terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "checked-out" | "checked_out" | "checkedout" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid status: {s}")),
        }
    }
}

/// A status that staff set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManualStatus {
    /// The guest was checked out.
    #[serde(rename = "Checked-Out")]
    CheckedOut,
    /// The reservation was cancelled.
    Cancelled,
}

impl ManualStatus {
    /// Returns the display string, identical to the matching [`Status`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        Status::from_manual(self).as_str()
    }
}

impl Status {
    const fn from_manual(manual: ManualStatus) -> Self {
        match manual {
            ManualStatus::CheckedOut => Self::CheckedOut,
            ManualStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<ManualStatus> for Status {
    fn from(manual: ManualStatus) -> Self {
        Self::from_manual(manual)
    }
}

impl fmt::Display for ManualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManualStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<Status>()? {
            Status::CheckedOut => Ok(Self::CheckedOut),
            Status::Cancelled => Ok(Self::Cancelled),
            other => Err(format!("{other} cannot be set manually")),
        }
    }
}

/// Computes the status of a stay on `today`.
///
/// A manual override always wins. Otherwise the stay is upcoming before the
/// check-in date, completed from the check-out date onwards, and active in
/// between.
#[must_use]
pub fn derive_status(
    check_in: NaiveDate,
    check_out: NaiveDate,
    manual: Option<ManualStatus>,
    today: NaiveDate,
) -> Status {
    if let Some(manual) = manual {
        return manual.into();
    }

    if today < check_in {
        Status::Upcoming
    } else if today >= check_out {
        Status::Completed
    } else {
        Status::Active
    }
}

/// Checks whether `requested` may be applied to a reservation whose status
/// is currently `current`.
///
/// Check-out is only allowed while the stay is active; cancellation only
/// before it starts.
///
/// # Errors
///
/// Returns [`Error::IllegalTransition`] with an operator-facing reason when
/// the change is not allowed.
///
/// # Examples
///
/// ```
/// use resort::status::{check_transition, ManualStatus, Status};
///
/// assert!(check_transition(Status::Active, ManualStatus::CheckedOut).is_ok());
/// assert!(check_transition(Status::Upcoming, ManualStatus::CheckedOut).is_err());
/// ```
pub fn check_transition(current: Status, requested: ManualStatus) -> Result<()> {
    let refusal = match (current, requested) {
        (Status::Active, ManualStatus::CheckedOut) | (Status::Upcoming, ManualStatus::Cancelled) => {
            return Ok(())
        }
        (Status::Upcoming, ManualStatus::CheckedOut) => "Cannot check out an upcoming reservation",
        (Status::Completed, ManualStatus::CheckedOut) => "Cannot check out a completed reservation",
        (Status::CheckedOut, ManualStatus::CheckedOut) => "This reservation is already checked out",
        (Status::Cancelled, ManualStatus::CheckedOut) => "Cannot check out a cancelled reservation",
        (Status::Active, ManualStatus::Cancelled) => "Cannot cancel a reservation that is in progress",
        (Status::Completed, ManualStatus::Cancelled) => "Cannot cancel a completed reservation",
        (Status::CheckedOut, ManualStatus::Cancelled) => "Cannot cancel a checked-out reservation",
        (Status::Cancelled, ManualStatus::Cancelled) => "This reservation is already cancelled",
    };

    Err(Error::IllegalTransition {
        from: current,
        to: requested,
        reason: refusal.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derive_status_by_date() {
        let check_in = date(2025, 1, 10);
        let check_out = date(2025, 1, 15);

        assert_eq!(
            derive_status(check_in, check_out, None, date(2025, 1, 5)),
            Status::Upcoming
        );
        assert_eq!(
            derive_status(check_in, check_out, None, date(2025, 1, 10)),
            Status::Active
        );
        assert_eq!(
            derive_status(check_in, check_out, None, date(2025, 1, 12)),
            Status::Active
        );
        assert_eq!(
            derive_status(check_in, check_out, None, date(2025, 1, 15)),
            Status::Completed
        );
        assert_eq!(
            derive_status(check_in, check_out, None, date(2025, 1, 20)),
            Status::Completed
        );
    }

    #[test]
    fn test_manual_override_wins() {
        let check_in = date(2025, 1, 10);
        let check_out = date(2025, 1, 15);

        for today in [date(2024, 12, 1), date(2025, 1, 12), date(2026, 1, 1)] {
            assert_eq!(
                derive_status(check_in, check_out, Some(ManualStatus::CheckedOut), today),
                Status::CheckedOut
            );
            assert_eq!(
                derive_status(check_in, check_out, Some(ManualStatus::Cancelled), today),
                Status::Cancelled
            );
        }
    }

    #[test]
    fn test_transition_table() {
        let allowed = [
            (Status::Active, ManualStatus::CheckedOut),
            (Status::Upcoming, ManualStatus::Cancelled),
        ];

        for status in Status::ALL {
            for requested in [ManualStatus::CheckedOut, ManualStatus::Cancelled] {
                let result = check_transition(status, requested);
                if allowed.contains(&(status, requested)) {
                    assert!(result.is_ok(), "{status} -> {requested} should be allowed");
                } else {
                    assert!(
                        matches!(result, Err(Error::IllegalTransition { .. })),
                        "{status} -> {requested} should be refused"
                    );
                }
            }
        }
    }

    #[test]
    fn test_terminal_statuses_refuse_everything() {
        for status in Status::ALL.into_iter().filter(|s| s.is_terminal()) {
            assert!(check_transition(status, ManualStatus::CheckedOut).is_err());
            assert!(check_transition(status, ManualStatus::Cancelled).is_err());
        }
    }

    #[test]
    fn test_refusal_reason_is_operator_facing() {
        let err = check_transition(Status::Cancelled, ManualStatus::Cancelled).unwrap_err();
        assert!(err.to_string().contains("already cancelled"));
    }

    #[test]
    fn test_status_display_and_parse() {
        assert_eq!(Status::CheckedOut.to_string(), "Checked-Out");
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert_eq!("checked_out".parse::<Status>().unwrap(), Status::CheckedOut);
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn test_manual_status_parse() {
        assert_eq!(
            "Cancelled".parse::<ManualStatus>().unwrap(),
            ManualStatus::Cancelled
        );
        assert!("Active".parse::<ManualStatus>().is_err());
        assert_eq!(Status::from(ManualStatus::CheckedOut), Status::CheckedOut);
    }
}
