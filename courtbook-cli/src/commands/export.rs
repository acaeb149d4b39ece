//! Export command implementation.
//!
//! This module implements the `export` command, which writes the schedule
//! for a date range to a file as CSV or JSON.

use crate::error::CliError;
use crate::utils::{open_database, parse_date, GlobalOptions};
use clap::{Args, ValueEnum};
use courtbook::export_schedule;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Export the schedule to CSV or JSON.
#[derive(Args)]
pub struct ExportCommand {
    /// First day of the range (DD.MM.YYYY)
    #[arg(long, value_name = "DATE")]
    pub from: String,

    /// Last day of the range, inclusive (DD.MM.YYYY)
    #[arg(long, value_name = "DATE")]
    pub to: String,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: ExportFormat,

    /// Destination file
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,
}

/// Output format for the export command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV, one row per reservation
    Csv,
    /// Pretty-printed JSON grouped by day
    Json,
}

impl From<ExportFormat> for courtbook::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Csv => Self::Csv,
            ExportFormat::Json => Self::Json,
        }
    }
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let from = parse_date(&self.from)?;
        let to = parse_date(&self.to)?;

        let db = open_database(global)?;

        let file = File::create(&self.output)?;
        let writer = BufWriter::new(file);
        export_schedule(db.connection(), from, to, self.format.into(), writer)?;

        println!("Exported schedule to {}", self.output.display());
        Ok(())
    }
}
