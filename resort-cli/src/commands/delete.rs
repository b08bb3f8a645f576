//! Delete command implementation.

use clap::Args;

use crate::error::CliError;
use crate::utils::{open_desk, print_warnings, GlobalOptions};

/// Delete a reservation, whatever its status.
#[derive(Args)]
pub struct DeleteCommand {
    /// Reservation ID
    pub id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut desk = open_desk(global)?;
        let outcome = desk.delete_reservation(self.id.trim())?;

        println!(
            "Deleted reservation {} ({})",
            outcome.value.id(),
            outcome.value.guest_name()
        );
        print_warnings(global, &outcome.warnings);

        Ok(())
    }
}
