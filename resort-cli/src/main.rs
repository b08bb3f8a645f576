//! Main entry point for the resort CLI.
//!
//! This is the command-line front desk for the resort reservation system.
//! It provides commands for managing reservations:
//! - `create`, `delete`: add or remove a reservation
//! - `check-out`, `cancel`: record staff status changes
//! - `show`, `list`: inspect reservations, with free-text search
//! - `report`, `dashboard`, `invoice`: aggregate and billing views

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    resort::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        today: cli.today,
        operator: cli.operator,
        secret: cli.secret,
    };

    let result = match cli.command {
        cli::Command::Create(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::CheckOut(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Report(cmd) => cmd.execute(&global),
        cli::Command::Dashboard(cmd) => cmd.execute(&global),
        cli::Command::Invoice(cmd) => cmd.execute(&global),
        cli::Command::Login(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
