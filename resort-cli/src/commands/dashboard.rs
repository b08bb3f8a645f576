//! Dashboard command implementation.

use clap::Args;

use resort::search::format_cost;

use crate::error::CliError;
use crate::utils::{open_desk, print_json, resolve_today, GlobalOptions};

/// Show the headline figures: bookings, active stays and revenue.
#[derive(Args)]
pub struct DashboardCommand {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl DashboardCommand {
    /// Execute the dashboard command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = open_desk(global)?;
        let stats = desk.dashboard(resolve_today(global));

        if self.json {
            return print_json(&stats);
        }

        println!("Total Bookings:  {}", stats.total_bookings);
        println!("Active Bookings: {}", stats.active_bookings);
        println!(
            "Total Revenue:   {} {}",
            format_cost(stats.total_revenue),
            desk.config().currency()
        );

        Ok(())
    }
}
