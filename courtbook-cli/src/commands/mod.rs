//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book a court slot
//! - `cancel`: Cancel an existing reservation
//! - `schedule`: Print the schedule for a date range
//! - `export`: Export the schedule to CSV or JSON

pub mod book;
pub mod cancel;
pub mod export;
pub mod schedule;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use export::ExportCommand;
pub use schedule::ScheduleCommand;
