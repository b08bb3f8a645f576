//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in various formats (table, JSON, CSV, TSV), optionally narrowed by a
//! free-text search.

use std::io::Write;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use resort::config::OutputFormat as ConfiguredFormat;
use resort::{DisplayRow, Reservation};

use crate::commands::show::ReservationView;
use crate::error::CliError;
use crate::utils::{open_desk, resolve_today, write_table, GlobalOptions};

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format [default: table, or `output_format` from config]
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Only show rows where any column contains this text (case-insensitive)
    #[arg(long, short = 's', value_name = "TEXT")]
    pub search: Option<String>,
}

/// Output format for list command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ConfiguredFormat> for OutputFormat {
    fn from(format: ConfiguredFormat) -> Self {
        match format {
            ConfiguredFormat::Table => Self::Table,
            ConfiguredFormat::Json => Self::Json,
            ConfiguredFormat::Csv => Self::Csv,
            ConfiguredFormat::Tsv => Self::Tsv,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = open_desk(global)?;
        let today = resolve_today(global);

        let format = self
            .format
            .or_else(|| desk.config().output_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Table);

        let reservations = match self.search.as_deref() {
            Some(query) => desk.filter(query, today),
            None => desk.list_all(),
        };

        match format {
            OutputFormat::Table => format_as_table(&reservations, today)?,
            OutputFormat::Json => format_as_json(&reservations, today)?,
            OutputFormat::Csv => format_as_delimited(&reservations, today, b',')?,
            OutputFormat::Tsv => format_as_delimited(&reservations, today, b'\t')?,
        }

        Ok(())
    }
}

fn display_rows(reservations: &[&Reservation], today: NaiveDate) -> Vec<Vec<String>> {
    reservations
        .iter()
        .map(|r| {
            DisplayRow::from_reservation(r, today)
                .columns()
                .iter()
                .map(|c| (*c).to_string())
                .collect()
        })
        .collect()
}

/// Format reservations as an aligned table.
fn format_as_table(reservations: &[&Reservation], today: NaiveDate) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if reservations.is_empty() {
        writeln!(handle, "No reservations found")?;
        return Ok(());
    }

    write_table(
        &mut handle,
        &DisplayRow::HEADERS,
        &display_rows(reservations, today),
    )?;
    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[&Reservation], today: NaiveDate) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let views: Vec<ReservationView<'_>> = reservations
        .iter()
        .map(|r| ReservationView::new(r, today))
        .collect();

    serde_json::to_writer_pretty(&mut handle, &views)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV), using the same
/// columns as the table.
fn format_as_delimited(
    reservations: &[&Reservation],
    today: NaiveDate,
    delimiter: u8,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(DisplayRow::HEADERS).map_err(csv_error)?;
    for row in display_rows(reservations, today) {
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
