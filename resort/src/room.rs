//! Room types and the nightly rate table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reservation::FieldError;

/// The kind of room a reservation books.
///
/// # Examples
///
/// ```
/// use resort::RoomType;
///
/// let room: RoomType = "suite".parse().unwrap();
/// assert_eq!(room, RoomType::Suite);
/// assert_eq!(room.nightly_rate(), 20_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomType {
    /// Single occupancy room.
    Single,
    /// Double occupancy room.
    Double,
    /// Suite.
    Suite,
}

impl RoomType {
    /// Every room type, in the order reports list them.
    pub const ALL: [Self; 3] = [Self::Single, Self::Double, Self::Suite];

    /// Returns the price of one night in this room type.
    #[must_use]
    pub const fn nightly_rate(self) -> i64 {
        match self {
            Self::Single => 8_000,
            Self::Double => 12_000,
            Self::Suite => 20_000,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            other => Err(FieldError::new(
                "room_type",
                format!("unknown room type '{other}' (expected Single, Double or Suite)"),
            )),
        }
    }
}
