//! Create command implementation.

use chrono::NaiveDate;
use clap::Args;

use resort::search::format_cost;
use resort::{ReservationRequest, RoomType};

use crate::error::CliError;
use crate::utils::{open_desk, parse_date, parse_room_type, print_warnings, GlobalOptions};

/// Create a new reservation.
#[derive(Args)]
pub struct CreateCommand {
    /// Reservation ID (must be unique)
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Guest name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Guest address
    #[arg(long, value_name = "ADDRESS", default_value = "")]
    pub address: String,

    /// Guest contact number
    #[arg(long, value_name = "PHONE")]
    pub contact: String,

    /// Room type: single, double or suite
    #[arg(long, value_name = "TYPE", value_parser = parse_room_type)]
    pub room: RoomType,

    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub check_in: NaiveDate,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub check_out: NaiveDate,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut desk = open_desk(global)?;
        let currency = desk.config().currency().to_string();

        let request = ReservationRequest {
            id: self.id,
            guest_name: self.name,
            address: self.address,
            contact_number: self.contact,
            room_type: self.room,
            check_in: self.check_in,
            check_out: self.check_out,
        };

        let outcome = desk.create_reservation(request)?;
        let reservation = outcome.value;
        println!(
            "Reservation saved. ID: {} | Guest: {} | Cost: {} {currency}",
            reservation.id(),
            reservation.guest_name(),
            format_cost(reservation.total_cost()),
        );
        print_warnings(global, &outcome.warnings);

        Ok(())
    }
}
