//! Command-line interface definitions.
//!
//! Defines the CLI structure for waitlens using `clap`: analytics reports
//! and exports over a SQLite entry store, plus commands to load and update
//! that store and to manage configuration.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use super::paths;
use crate::domain::EntryStatus;

/// Waitlist analytics: signups, conversion and wait time over time
#[derive(Parser, Debug)]
#[command(name = "waitlens")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Database file, overriding the configured one
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show dashboard metrics and daily series for an owner
    Report(ReportArgs),

    /// Export daily series as CSV or JSON
    Export(ExportArgs),

    /// Show the all-time status breakdown of one collection
    Summary(SummaryArgs),

    /// Show the newest signups across an owner's collections
    Activity(ListArgs),

    /// Rank an owner's collections by signup count
    Top(ListArgs),

    /// Load collections and entries from a JSON file
    Import(ImportArgs),

    /// Manage individual entries
    #[command(subcommand)]
    Entry(EntryCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Time window selection shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Range code: 7d, 30d, 90d or 12m (unknown codes mean 7d)
    #[arg(short, long, conflicts_with = "days")]
    pub range: Option<String>,

    /// Custom window length in days
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// End of the window: RFC 3339 timestamp or YYYY-MM-DD (default: now)
    #[arg(long, value_parser = parse_anchor)]
    pub anchor: Option<DateTime<Utc>>,
}

/// Arguments for `waitlens report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Owner whose collections are analysed
    #[arg(short, long)]
    pub owner: String,

    /// Restrict the report to one of the owner's collections
    #[arg(long)]
    pub collection: Option<String>,

    #[command(flatten)]
    pub window: WindowArgs,
}

/// File format for `waitlens export`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per day
    #[default]
    Csv,
    /// The full analytics result
    Json,
}

/// Arguments for `waitlens export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Owner whose collections are analysed
    #[arg(short, long)]
    pub owner: String,

    /// Restrict the export to one of the owner's collections
    #[arg(long)]
    pub collection: Option<String>,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `waitlens summary`.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Collection to summarize
    pub collection: String,

    /// Only count entries created up to this point (default: now)
    #[arg(long, value_parser = parse_anchor)]
    pub anchor: Option<DateTime<Utc>>,
}

/// Arguments for `waitlens activity` and `waitlens top`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Owner whose collections are listed
    #[arg(short, long)]
    pub owner: String,

    /// Maximum number of rows
    #[arg(short = 'n', long, default_value_t = 5)]
    pub limit: usize,

    /// Only consider entries created up to this point (default: now)
    #[arg(long, value_parser = parse_anchor)]
    pub anchor: Option<DateTime<Utc>>,
}

/// Arguments for `waitlens import`.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file with `collections` and `entries` arrays
    pub file: PathBuf,
}

/// Subcommands for `waitlens entry`.
#[derive(Subcommand, Debug)]
pub enum EntryCommand {
    /// Approve or reject a pending entry
    SetStatus(SetStatusArgs),
}

/// Arguments for `waitlens entry set-status`.
#[derive(Args, Debug)]
pub struct SetStatusArgs {
    /// Entry id
    pub id: String,

    /// New status: approved or rejected
    #[arg(value_parser = parse_status)]
    pub status: EntryStatus,

    /// Time of the change (default: now)
    #[arg(long, value_parser = parse_anchor)]
    pub at: Option<DateTime<Utc>>,
}

/// Subcommands for `waitlens config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration file
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}

/// Arguments for `waitlens config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Parse an RFC 3339 timestamp or a bare date at UTC midnight.
pub fn parse_anchor(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("expected RFC 3339 or YYYY-MM-DD, got {value:?}"))
}

fn parse_status(value: &str) -> Result<EntryStatus, String> {
    value.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}
