//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, opening the front desk, date handling,
//! and plain-text table rendering.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use resort::{Config, ConfigBuilder, FrontDesk, RoomType};
use serde::Serialize;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// The date statuses are evaluated on.
    pub today: Option<NaiveDate>,

    /// Operator user name presented to the login gate.
    pub operator: Option<String>,

    /// Operator password presented to the login gate.
    pub secret: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Loads configuration, opens the store, and passes the login gate.
///
/// A warning raised while loading the snapshot is printed before the
/// credentials are checked.
pub fn open_desk(global: &GlobalOptions) -> Result<FrontDesk, CliError> {
    let config = load_configuration(global)?;
    let desk = FrontDesk::open(config)?;

    if let Some(warning) = desk.startup_warning() {
        print_warning(global, warning);
    }

    desk.verify_operator(global.operator.as_deref(), global.secret.as_deref())?;
    Ok(desk)
}

/// The date to evaluate statuses on: `--today` or the local calendar date.
pub fn resolve_today(global: &GlobalOptions) -> NaiveDate {
    global
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Prints one warning to stderr unless `--quiet` is set.
pub fn print_warning(global: &GlobalOptions, warning: &str) {
    if !global.quiet {
        eprintln!("Warning: {warning}");
    }
}

/// Prints every warning from a mutation.
pub fn print_warnings(global: &GlobalOptions, warnings: &[String]) {
    for warning in warnings {
        print_warning(global, warning);
    }
}

/// Pretty-prints any serializable value to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    println!("{text}");
    Ok(())
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

/// Parses a room type argument.
pub fn parse_room_type(s: &str) -> Result<RoomType, String> {
    s.parse::<RoomType>().map_err(|e| e.message)
}

/// Writes rows as a left-aligned table padded to the widest cell of each
/// column.
pub fn write_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", render_line(headers.iter().copied(), &widths))?;
    for row in rows {
        writeln!(out, "{}", render_line(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}
