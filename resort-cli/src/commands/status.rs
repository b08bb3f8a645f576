//! Check-out and cancel command implementations.
//!
//! Both go through the same legality check in the library; the commands
//! only differ in the requested status.

use clap::Args;

use resort::ManualStatus;

use crate::error::CliError;
use crate::utils::{open_desk, print_warnings, resolve_today, GlobalOptions};

/// Check a guest out of an active reservation.
#[derive(Args)]
pub struct CheckOutCommand {
    /// Reservation ID
    pub id: String,
}

impl CheckOutCommand {
    /// Execute the check-out command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        apply(global, &self.id, ManualStatus::CheckedOut)
    }
}

/// Cancel an upcoming reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation ID
    pub id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        apply(global, &self.id, ManualStatus::Cancelled)
    }
}

fn apply(global: &GlobalOptions, id: &str, status: ManualStatus) -> Result<(), CliError> {
    let mut desk = open_desk(global)?;
    let today = resolve_today(global);

    let outcome = desk.set_manual_status(id.trim(), status, today)?;
    println!(
        "Reservation {} is now {}",
        outcome.value.id(),
        outcome.value.current_status(today)
    );
    print_warnings(global, &outcome.warnings);

    Ok(())
}
