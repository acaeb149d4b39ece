//! Database CRUD operations for reservations.
//!
//! This module implements all create, read, and delete operations for
//! court reservations in the database. Timestamps cross the storage edge
//! as `YYYY-MM-DD HH:MM:SS` text; the parse/format adapters here are the
//! only place that representation appears.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::Reservation;

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION};

/// Text format for timestamps at the storage edge.
const STORAGE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text format for bare dates passed to `date(start_time)` comparisons.
const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a timestamp for database storage.
pub(super) fn datetime_to_storage(dt: NaiveDateTime) -> String {
    dt.format(STORAGE_DATETIME_FORMAT).to_string()
}

/// Parses a timestamp from its database storage form.
///
/// # Errors
///
/// Returns an error if the text does not match the storage format.
pub(super) fn storage_to_datetime(text: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(text, STORAGE_DATETIME_FORMAT)?)
}

/// Formats a date for `date(start_time)` comparisons.
fn date_to_storage(date: NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}

/// Raw column values of a reservation row: id, name, `start_time`,
/// `end_time`.
type RawRow = (i64, String, String, String);

/// Extracts the raw column values from a database row.
fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

/// Decodes raw column values into a reservation.
///
/// Every row was written through the validated insert path, so a row that
/// fails to parse or validate here indicates corrupted storage.
fn raw_to_reservation((id, name, start_text, end_text): RawRow) -> Result<Reservation> {
    let start_time = storage_to_datetime(&start_text).map_err(|_| Error::DatabaseCorruption {
        details: format!("reservation {id} has unreadable start_time '{start_text}'"),
    })?;
    let end_time = storage_to_datetime(&end_text).map_err(|_| Error::DatabaseCorruption {
        details: format!("reservation {id} has unreadable end_time '{end_text}'"),
    })?;

    Reservation::new(id, name, start_time, end_time).map_err(|e| Error::DatabaseCorruption {
        details: format!("reservation {id} is invalid: {e}"),
    })
}

// SQL statements for read operations
const SELECT_BY_NAME_AND_START: &str = r"
    SELECT id, name, start_time, end_time
    FROM reservations
    WHERE name = ? AND start_time = ?
";

const COUNT_FOR_NAME_BETWEEN: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE name = ? AND start_time >= ? AND start_time < ?
";

const SELECT_ON_DATE: &str = r"
    SELECT id, name, start_time, end_time
    FROM reservations
    WHERE date(start_time) = ?
    ORDER BY start_time
";

const SELECT_BETWEEN_DATES: &str = r"
    SELECT id, name, start_time, end_time
    FROM reservations
    WHERE date(start_time) BETWEEN ? AND ?
    ORDER BY start_time
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, name, start_time, end_time
    FROM reservations
    ORDER BY start_time
";

impl Database {
    /// Inserts a reservation and returns it with its storage-assigned id.
    ///
    /// This is a single autocommit statement; a crash can at worst lose
    /// this row, never corrupt existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or interval fails validation, or if
    /// the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use courtbook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/courtbook.db")).unwrap();
    /// let day = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap();
    ///
    /// let reservation = db
    ///     .insert_reservation(
    ///         "Jan",
    ///         day.and_hms_opt(20, 0, 0).unwrap(),
    ///         day.and_hms_opt(21, 0, 0).unwrap(),
    ///     )
    ///     .unwrap();
    /// assert!(reservation.id() > 0);
    /// ```
    pub fn insert_reservation(
        &mut self,
        name: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Reservation> {
        // Validate before touching the database
        let candidate = Reservation::new(0, name.to_string(), start_time, end_time)?;

        self.conn.execute(
            INSERT_RESERVATION,
            params![
                candidate.name(),
                datetime_to_storage(start_time),
                datetime_to_storage(end_time),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Reservation::new(
            id,
            candidate.name().to_string(),
            start_time,
            end_time,
        )?)
    }

    /// Deletes a reservation by exact (name, start time) match.
    ///
    /// There is no tolerance window: the start time must match to the
    /// second as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a matching row was deleted
    /// - `Ok(false)` if no row matched
    pub fn delete_reservation(&mut self, name: &str, start_time: NaiveDateTime) -> Result<bool> {
        let rows_affected = self.conn.execute(
            DELETE_RESERVATION,
            params![name, datetime_to_storage(start_time)],
        )?;
        Ok(rows_affected > 0)
    }

    /// Retrieves a reservation by exact (name, start time) match.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if it doesn't
    pub fn find_reservation(
        conn: &Connection,
        name: &str,
        start_time: NaiveDateTime,
    ) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_BY_NAME_AND_START)?;

        match stmt.query_row(params![name, datetime_to_storage(start_time)], row_to_raw) {
            Ok(raw) => Ok(Some(raw_to_reservation(raw)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Counts reservations for a name with a start time in `[from, to)`.
    ///
    /// Used for the weekly quota check.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_for_name_between(
        conn: &Connection,
        name: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64> {
        let count = conn.query_row(
            COUNT_FOR_NAME_BETWEEN,
            params![name, datetime_to_storage(from), datetime_to_storage(to)],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Lists reservations whose start time falls on the given date,
    /// ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn reservations_on(conn: &Connection, date: NaiveDate) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(SELECT_ON_DATE)?;
        let rows = stmt.query_map(params![date_to_storage(date)], row_to_raw)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(raw_to_reservation(row?)?);
        }
        Ok(reservations)
    }

    /// Lists reservations whose start date falls in the inclusive range,
    /// ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn reservations_between(
        conn: &Connection,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(SELECT_BETWEEN_DATES)?;
        let rows = stmt.query_map(params![date_to_storage(from), date_to_storage(to)], row_to_raw)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(raw_to_reservation(row?)?);
        }
        Ok(reservations)
    }

    /// Lists all reservations, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt.query_map([], row_to_raw)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(raw_to_reservation(row?)?);
        }
        Ok(reservations)
    }
}
