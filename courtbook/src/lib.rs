#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # courtbook
//!
//! A library for managing court reservations.
//!
//! This library provides core types and functionality for booking,
//! cancelling, reporting, and exporting court reservations backed by a
//! single SQLite file.
//!
//! ## Core Types
//!
//! - [`Reservation`] and [`SlotLength`]: Reservation intervals and durations
//! - [`Database`] and [`DatabaseConfig`]: SQLite-backed storage
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use courtbook::{Reservation, SlotLength};
//!
//! let day = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap();
//! let reservation = Reservation::new(
//!     1,
//!     "Jan".to_string(),
//!     day.and_hms_opt(20, 0, 0).unwrap(),
//!     day.and_hms_opt(21, 0, 0).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(reservation.name(), "Jan");
//!
//! // Evening starts only offer the two shorter slot lengths
//! let evening = day.and_hms_opt(18, 0, 0).unwrap();
//! assert!(!SlotLength::NinetyMinutes.is_offered_at(evening));
//! ```

pub mod database;
pub mod error;
pub mod export;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod schedule;

// Re-export key types at crate root for convenience
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use export::{day_groups, export_schedule, ExportEntry, ExportFormat};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    week_bounds, BookingOptions, BookingPlan, CancelOptions, CancelPlan, ExecutionResult,
    OperationPlan, PlanAction, PlanExecutor,
};
pub use reservation::{Reservation, SlotLength, ValidationError};
pub use schedule::render_schedule;
