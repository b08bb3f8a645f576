//! Build script for resort-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use std::fs;
use std::path::PathBuf;

use clap::{Arg, Command};
use clap_mangen::Man;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("resort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage resort room reservations")
        .long_about(
            "Front desk tool for creating, tracking, searching and reporting on resort room reservations",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("RESORT_DATA_DIR"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .help("Evaluate statuses as of this date instead of today (YYYY-MM-DD)")
                .value_name("DATE")
                .global(true)
                .env("RESORT_TODAY"),
        )
        .arg(
            Arg::new("operator")
                .long("operator")
                .help("Operator user name, checked when a login is configured")
                .value_name("USER")
                .global(true)
                .env("RESORT_OPERATOR"),
        )
        .arg(
            Arg::new("secret")
                .long("secret")
                .help("Operator password, checked when a login is configured")
                .value_name("PASSWORD")
                .global(true)
                .env("RESORT_SECRET")
                .hide_env_values(true),
        )
        .subcommands(vec![
            Command::new("create")
                .about("Create a reservation")
                .long_about("Validate and store a new reservation, computing its cost"),
            Command::new("delete")
                .about("Delete a reservation")
                .long_about("Remove a reservation by id, whatever its status"),
            Command::new("check-out")
                .about("Check out an active reservation")
                .long_about("Record that the guest of an active reservation has left"),
            Command::new("cancel")
                .about("Cancel an upcoming reservation")
                .long_about("Cancel a reservation whose stay has not started"),
            Command::new("show")
                .about("Show one reservation")
                .long_about("Display every field of a reservation as text or JSON"),
            Command::new("list")
                .about("List reservations, optionally filtered")
                .long_about("Display reservations as a table, JSON, CSV or TSV, with free-text search"),
            Command::new("report")
                .about("Print an aggregate report")
                .long_about("Print the summary, room analysis or status report"),
            Command::new("dashboard")
                .about("Show total bookings, active bookings and revenue")
                .long_about("Display the headline figures for the front desk"),
            Command::new("invoice")
                .about("Print a guest invoice")
                .long_about("Print the billing view of one reservation"),
            Command::new("login")
                .about("Check operator credentials")
                .long_about("Verify --operator and --secret against the configured account"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("resort.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
