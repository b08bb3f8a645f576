//! Invoice command implementation.

use clap::Args;

use crate::error::CliError;
use crate::utils::{open_desk, print_json, resolve_today, GlobalOptions};

/// Print the invoice for one reservation.
#[derive(Args)]
pub struct InvoiceCommand {
    /// Reservation ID
    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl InvoiceCommand {
    /// Execute the invoice command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = open_desk(global)?;
        let invoice = desk.invoice(self.id.trim(), resolve_today(global))?;

        if self.json {
            return print_json(&invoice);
        }

        print!("{}", invoice.render_text(desk.config().currency()));
        Ok(())
    }
}
