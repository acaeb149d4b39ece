//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including date parsing, database path resolution, and database opening.

use crate::error::CliError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use courtbook::{Database, DatabaseConfig};
use std::path::PathBuf;

/// User-facing timestamp format.
pub const INPUT_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// User-facing date format.
pub const INPUT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity fields are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Parse a user-supplied timestamp (`DD.MM.YYYY HH:MM`).
///
/// Input is minute precision; seconds are always zero.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, CliError> {
    NaiveDateTime::parse_from_str(input.trim(), INPUT_DATETIME_FORMAT).map_err(|_| {
        CliError::InvalidArguments(format!(
            "'{input}' is not a valid timestamp (expected DD.MM.YYYY HH:MM)"
        ))
    })
}

/// Parse a user-supplied date (`DD.MM.YYYY`).
pub fn parse_date(input: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        CliError::InvalidArguments(format!(
            "'{input}' is not a valid date (expected DD.MM.YYYY)"
        ))
    })
}

/// Returns the current wall-clock time in the local timezone.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Resolve the database path from global options.
fn resolve_database_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    // Priority: global option > default
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("courtbook.db"));
    }

    // Default: ~/.courtbook/courtbook.db
    let home_dir = home::home_dir().ok_or_else(|| {
        CliError::InvalidArguments("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".courtbook").join("courtbook.db"))
}

/// Open the database using global options.
pub fn open_database(global: &GlobalOptions) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global)?;

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    }

    Database::open(db_config).map_err(CliError::from)
}
