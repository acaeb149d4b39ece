//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the courtbook reservation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Timestamps are stored as `YYYY-MM-DD HH:MM:SS` text; with that format,
/// lexical comparison matches chronological comparison, which the range
/// queries rely on.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL
    )";

/// SQL statement to create an index on the name column.
///
/// This index speeds up the weekly quota count and exact-match lookups.
pub const CREATE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_name ON reservations(name)";

/// SQL statement to create an index on the `start_time` column.
///
/// This index speeds up day and date-range selects for reporting and export.
pub const CREATE_START_TIME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_start_time ON reservations(start_time)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (name, start_time, end_time)
    VALUES (?, ?, ?)
";

/// SQL statement to delete a reservation by exact (name, start_time) match.
pub const DELETE_RESERVATION: &str = r"
    DELETE FROM reservations
    WHERE name = ? AND start_time = ?
";
