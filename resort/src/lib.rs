#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # resort
//!
//! A library for running the reservation book of a small hotel.
//!
//! Reservations are created from operator input, priced once from the
//! room-type rate table, and given a status that is derived from their stay
//! dates on the day it is asked for. Staff can check a guest out or cancel a
//! booking, which fixes the status for good.
//!
//! ## Core Types
//!
//! - [`Reservation`] and [`ReservationRequest`]: the booking entity and its input
//! - [`RoomType`]: the three room types and their nightly rates
//! - [`Status`] and [`ManualStatus`]: the lifecycle engine
//! - [`ReservationStore`]: the keyed collection that owns every reservation
//! - [`FrontDesk`]: the operations a front end invokes, with persistence
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use resort::{Reservation, ReservationRequest, RoomType, Status};
//!
//! let reservation = Reservation::create(ReservationRequest {
//!     id: "R1".to_string(),
//!     guest_name: "Alice".to_string(),
//!     address: String::new(),
//!     contact_number: "0771234567".to_string(),
//!     room_type: RoomType::Single,
//!     check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
//!     check_out: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
//! })
//! .unwrap();
//!
//! assert_eq!(reservation.total_cost(), 40_000);
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
//! assert_eq!(reservation.current_status(today), Status::Active);
//! ```

pub mod auth;
pub mod config;
pub mod database;
pub mod desk;
pub mod error;
pub mod invoice;
pub mod logging;
pub mod report;
pub mod reservation;
pub mod room;
pub mod search;
pub mod status;
pub mod store;

// Re-export key types at crate root for convenience
pub use auth::OperatorGate;
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use desk::{FrontDesk, Outcome};
pub use error::{Error, Result};
pub use invoice::Invoice;
pub use logging::{init_logger, LogLevel, Logger};
pub use report::{
    DashboardStats, RoomAnalysis, RoomStats, StatusCounts, StatusReport, StatusStats,
    SummaryReport,
};
pub use reservation::{FieldError, Reservation, ReservationRequest};
pub use room::RoomType;
pub use search::DisplayRow;
pub use status::{ManualStatus, Status};
pub use store::ReservationStore;
