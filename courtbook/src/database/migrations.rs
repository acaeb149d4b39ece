//! Database schema management and migrations.
//!
//! This module handles database schema initialization, version checking,
//! and migrations.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_METADATA_TABLE, CREATE_NAME_INDEX, CREATE_RESERVATIONS_TABLE, CREATE_START_TIME_INDEX,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. All statements are idempotent, so calling it on an already
/// initialized database is harmless.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use courtbook::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_NAME_INDEX, [])?;
    conn.execute(CREATE_START_TIME_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" (which indicates version 0).
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table: metadata" on a fresh file
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// This function:
/// 1. Checks the current schema version
/// 2. If version is 0, initializes the schema
/// 3. If version differs from the client's, returns an error
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the stored version does
/// not match the client version, or a database error if initialization or
/// the version query fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_schema() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);

        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_initialize_schema_twice() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, 0);
    }

    #[test]
    fn test_check_schema_compatibility_fresh_database() {
        let conn = create_test_connection();

        check_schema_compatibility(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_check_schema_compatibility_current_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_check_schema_compatibility_newer_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let result = check_schema_compatibility(&conn);
        assert!(matches!(
            result,
            Err(Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 999
            })
        ));
    }

    #[test]
    fn test_schema_creates_all_indices() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let index_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_reservations_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(index_count, 2);
    }
}
