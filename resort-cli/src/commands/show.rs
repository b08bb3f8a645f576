//! Show command implementation.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use resort::search::{format_cost, format_date};
use resort::{Error, Reservation};

use crate::error::CliError;
use crate::utils::{open_desk, print_json, resolve_today, GlobalOptions};

/// Show every field of one reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation ID
    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = open_desk(global)?;
        let today = resolve_today(global);
        let id = self.id.trim();

        let reservation = desk.get_reservation(id).ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        if self.json {
            return print_json(&ReservationView::new(reservation, today));
        }

        let currency = desk.config().currency();
        let fields = [
            ("Reservation ID", reservation.id().to_string()),
            ("Guest Name", reservation.guest_name().to_string()),
            ("Address", reservation.address().to_string()),
            ("Contact", reservation.contact_number().to_string()),
            ("Room Type", reservation.room_type().to_string()),
            ("Check-In", format_date(reservation.check_in())),
            ("Check-Out", format_date(reservation.check_out())),
            ("Nights", reservation.nights().to_string()),
            ("Status", reservation.current_status(today).to_string()),
            (
                "Total Cost",
                format!("{} {currency}", format_cost(reservation.total_cost())),
            ),
        ];
        for (label, value) in fields {
            println!("{:<16}{value}", format!("{label}:"));
        }

        Ok(())
    }
}

/// The JSON shape shared by `show` and `list`.
#[derive(Serialize)]
pub struct ReservationView<'a> {
    id: &'a str,
    guest_name: &'a str,
    address: &'a str,
    contact_number: &'a str,
    room_type: &'static str,
    check_in: String,
    check_out: String,
    nights: i64,
    status: &'static str,
    total_cost: i64,
}

impl<'a> ReservationView<'a> {
    /// Captures `r` with its status as of `today`.
    pub fn new(r: &'a Reservation, today: NaiveDate) -> Self {
        Self {
            id: r.id(),
            guest_name: r.guest_name(),
            address: r.address(),
            contact_number: r.contact_number(),
            room_type: r.room_type().as_str(),
            check_in: format_date(r.check_in()),
            check_out: format_date(r.check_out()),
            nights: r.nights(),
            status: r.current_status(today).as_str(),
            total_cost: r.total_cost(),
        }
    }
}
