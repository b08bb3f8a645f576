//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands::{
    CancelCommand, CheckOutCommand, CompletionsCommand, CreateCommand, DashboardCommand,
    DeleteCommand, InvoiceCommand, ListCommand, LoginCommand, ReportCommand, ShowCommand,
};
use crate::utils::parse_date;

/// Front desk tool for resort room reservations.
#[derive(Parser)]
#[command(name = "resort")]
#[command(version, about = "Manage resort room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "RESORT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Evaluate statuses as of this date instead of today (YYYY-MM-DD)
    #[arg(
        long,
        value_name = "DATE",
        global = true,
        env = "RESORT_TODAY",
        value_parser = parse_date
    )]
    pub today: Option<NaiveDate>,

    /// Operator user name, checked when a login is configured
    #[arg(long, value_name = "USER", global = true, env = "RESORT_OPERATOR")]
    pub operator: Option<String>,

    /// Operator password, checked when a login is configured
    #[arg(
        long,
        value_name = "PASSWORD",
        global = true,
        env = "RESORT_SECRET",
        hide_env_values = true
    )]
    pub secret: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a reservation
    Create(CreateCommand),

    /// Delete a reservation
    Delete(DeleteCommand),

    /// Check out an active reservation
    CheckOut(CheckOutCommand),

    /// Cancel an upcoming reservation
    Cancel(CancelCommand),

    /// Show one reservation
    Show(ShowCommand),

    /// List reservations, optionally filtered
    List(ListCommand),

    /// Print an aggregate report
    Report(ReportCommand),

    /// Show total bookings, active bookings and revenue
    Dashboard(DashboardCommand),

    /// Print a guest invoice
    Invoice(InvoiceCommand),

    /// Check operator credentials
    Login(LoginCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
