//! Schedule export to CSV and JSON.
//!
//! Both formats cover the same inclusive date range but follow different
//! density policies: JSON is dense (every day in the range appears as a
//! `DD.MM.YYYY` key, empty days mapping to an empty array) while CSV is
//! sparse (one row per reservation, no representation for empty days).

use std::io::Write;

use chrono::{Duration, NaiveDate};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::Reservation;

/// Date format used for JSON keys and CSV timestamps.
const EXPORT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one row per reservation.
    Csv,
    /// Pretty-printed JSON grouped by day.
    Json,
}

/// A single reservation as it appears in an export.
///
/// Times are pre-formatted strings: within a JSON day group only the
/// time-of-day is carried, the date lives in the group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    /// The booking party.
    pub name: String,
    /// Start time of day, `HH:MM`.
    pub start_time: String,
    /// End time of day, `HH:MM`.
    pub end_time: String,
}

impl From<&Reservation> for ExportEntry {
    fn from(reservation: &Reservation) -> Self {
        Self {
            name: reservation.name().to_string(),
            start_time: reservation.start_time().format("%H:%M").to_string(),
            end_time: reservation.end_time().format("%H:%M").to_string(),
        }
    }
}

/// Returns every day in the inclusive range with its ordered entries.
///
/// Days without reservations carry an empty list, so the result is dense
/// over the range and in calendar order.
///
/// # Errors
///
/// Returns [`Error::InvalidDateRange`] if `from > to`, or a database error.
pub fn day_groups(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<(NaiveDate, Vec<ExportEntry>)>> {
    if from > to {
        return Err(Error::InvalidDateRange { from, to });
    }

    let mut groups = Vec::new();
    let mut day = from;
    while day <= to {
        let entries = Database::reservations_on(conn, day)?
            .iter()
            .map(ExportEntry::from)
            .collect();
        groups.push((day, entries));
        day += Duration::days(1);
    }

    Ok(groups)
}

/// Writes the date range as pretty-printed JSON.
///
/// The output is an object keyed by `DD.MM.YYYY` in calendar order, each
/// value an array of entry objects, indented with four spaces.
fn write_json<W: Write>(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
    writer: W,
) -> Result<()> {
    let mut days = serde_json::Map::new();
    for (day, entries) in day_groups(conn, from, to)? {
        days.insert(
            day.format(EXPORT_DATE_FORMAT).to_string(),
            serde_json::to_value(entries)?,
        );
    }

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    serde_json::Value::Object(days).serialize(&mut serializer)?;
    Ok(())
}

/// Writes the date range as CSV.
///
/// Header `name,start_time,end_time`, one row per reservation in start
/// order, timestamps as full `DD.MM.YYYY HH:MM`. Empty days produce no rows.
fn write_csv<W: Write>(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
    writer: W,
) -> Result<()> {
    if from > to {
        return Err(Error::InvalidDateRange { from, to });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["name", "start_time", "end_time"])?;

    for reservation in Database::reservations_between(conn, from, to)? {
        csv_writer.write_record([
            reservation.name(),
            &reservation
                .start_time()
                .format("%d.%m.%Y %H:%M")
                .to_string(),
            &reservation.end_time().format("%d.%m.%Y %H:%M").to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Exports the reservations in the inclusive date range to the writer.
///
/// # Errors
///
/// Returns [`Error::InvalidDateRange`] if `from > to`, [`Error::Io`] on a
/// write failure (destination content is then unspecified), or a database
/// error. CSV serialization failures surface through the same error type.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use courtbook::export::{export_schedule, ExportFormat};
/// use courtbook::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/courtbook.db")).unwrap();
/// let day = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap();
/// let mut out = Vec::new();
/// export_schedule(db.connection(), day, day, ExportFormat::Json, &mut out).unwrap();
/// ```
pub fn export_schedule<W: Write>(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
    format: ExportFormat,
    writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(conn, from, to, writer),
        ExportFormat::Json => write_json(conn, from, to, writer),
    }
}
