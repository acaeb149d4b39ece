//! Database layer for persistent storage of court reservations.
//!
//! This module provides a SQLite-based storage layer for managing
//! reservations, including connection management, schema versioning, and
//! CRUD operations. Storage is the sole source of truth; no component
//! caches reservation state across operations.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use courtbook::database::{Database, DatabaseConfig};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/courtbook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Create a reservation
//! let day = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap();
//! let reservation = db
//!     .insert_reservation(
//!         "Jan",
//!         day.and_hms_opt(20, 0, 0).unwrap(),
//!         day.and_hms_opt(21, 0, 0).unwrap(),
//!     )
//!     .unwrap();
//!
//! // List all reservations
//! let all = Database::list_all_reservations(db.connection()).unwrap();
//! assert_eq!(all.len(), 1);
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::DatabaseConfig;
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
