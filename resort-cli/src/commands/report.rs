//! Report command implementation.
//!
//! Three reports are available: an overall summary, a per-room-type
//! breakdown and a per-status breakdown. Each prints as an aligned table or
//! as JSON.

use std::io::Write;

use clap::{Args, Subcommand};

use resort::search::format_cost;
use resort::{RoomAnalysis, Status, StatusReport, SummaryReport};

use crate::error::CliError;
use crate::utils::{open_desk, print_json, resolve_today, write_table, GlobalOptions};

/// Print an aggregate report.
#[derive(Args)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub kind: ReportKind,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// The report to print.
#[derive(Subcommand, Clone, Copy)]
pub enum ReportKind {
    /// Totals, status breakdown and bookings per room type
    Summary,
    /// Bookings, revenue and average cost per room type
    Rooms,
    /// Count and revenue per status
    Status,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = open_desk(global)?;
        let today = resolve_today(global);
        let currency = desk.config().currency().to_string();

        match self.kind {
            ReportKind::Summary => {
                let report = desk.summary_report(today);
                if self.json {
                    return print_json(&report);
                }
                print_summary(&report, &currency)
            }
            ReportKind::Rooms => {
                let report = desk.room_analysis_report();
                if self.json {
                    return print_json(&report);
                }
                print_rooms(&report, &currency)
            }
            ReportKind::Status => {
                let report = desk.status_report(today);
                if self.json {
                    return print_json(&report);
                }
                print_statuses(&report, &currency)
            }
        }
    }
}

fn print_summary(report: &SummaryReport, currency: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Reservation Summary")?;
    writeln!(out, "Total reservations: {}", report.total_reservations)?;
    writeln!(
        out,
        "Total revenue: {} {currency}",
        format_cost(report.total_revenue)
    )?;
    writeln!(out)?;

    let statuses: Vec<Vec<String>> = Status::ALL
        .iter()
        .map(|&s| vec![s.to_string(), report.status_counts.get(s).to_string()])
        .collect();
    write_table(&mut out, &["Status", "Count"], &statuses)?;
    writeln!(out)?;

    let rooms: Vec<Vec<String>> = report
        .room_counts
        .iter()
        .map(|(room, count)| vec![room.to_string(), count.to_string()])
        .collect();
    write_table(&mut out, &["Room Type", "Bookings"], &rooms)?;

    Ok(())
}

fn print_rooms(report: &RoomAnalysis, currency: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Room Analysis ({currency})")?;
    let rows: Vec<Vec<String>> = report
        .rooms
        .iter()
        .map(|r| {
            vec![
                r.room_type.to_string(),
                r.bookings.to_string(),
                format_cost(r.revenue),
                format_cost(r.average_cost),
            ]
        })
        .collect();
    write_table(
        &mut out,
        &["Room Type", "Bookings", "Revenue", "Average Cost"],
        &rows,
    )?;

    Ok(())
}

fn print_statuses(report: &StatusReport, currency: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Status Report ({currency})")?;
    let mut rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.status.to_string(),
                r.count.to_string(),
                format_cost(r.revenue),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        report.total_count.to_string(),
        format_cost(report.total_revenue),
    ]);
    write_table(&mut out, &["Status", "Count", "Revenue"], &rows)?;

    Ok(())
}
