//! Error types for the courtbook library.
//!
//! This module provides the error hierarchy for all operations in the
//! courtbook library, using `thiserror` for ergonomic error handling.
//! Booking and cancellation rejections are ordinary error variants: none
//! of them is fatal, and none of them leaves a partial write behind.

use chrono::NaiveDateTime;

use thiserror::Error;

/// Result type alias for operations that may fail with a courtbook error.
///
/// # Examples
///
/// ```
/// use courtbook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(60)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the courtbook library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation operations, including the validation rejections
/// produced by the booking and cancellation planners.
#[derive(Debug, Error)]
pub enum Error {
    /// The weekly reservation quota for a name is exhausted.
    #[error("'{name}' already holds {count} reservation(s) this week (limit 2)")]
    QuotaExceeded {
        /// The name whose quota is exhausted.
        name: String,
        /// The number of reservations already held in the week.
        count: i64,
    },

    /// The requested start time is not strictly in the future.
    #[error("start time {start} has already passed")]
    StartInPast {
        /// The rejected start time.
        start: NaiveDateTime,
    },

    /// The requested start time is less than the minimum lead time away.
    #[error("start time {start} is less than 1 hour away")]
    InsufficientLeadTime {
        /// The rejected start time.
        start: NaiveDateTime,
    },

    /// The caller declined the offered alternative slot.
    #[error("requested slot is taken and the offered alternative was declined")]
    SlotDeclined,

    /// The chosen slot length is not offered for the resolved start time.
    #[error("a {minutes}-minute slot is not available at {start}")]
    InvalidDuration {
        /// The rejected length in minutes.
        minutes: u32,
        /// The start time the length was requested for.
        start: NaiveDateTime,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An invalid date range was supplied (end before start).
    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// The start of the range.
        from: chrono::NaiveDate,
        /// The end of the range.
        to: chrono::NaiveDate,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A timestamp or date string could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] chrono::ParseError),

    /// A serialization error occurred during export.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A CSV write error occurred during export.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is a booking or cancellation rejection.
    ///
    /// Rejections are expected outcomes of the validation rules; they are
    /// recovered by re-prompting or abandoning the single operation, never
    /// by terminating the process.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtbook::Error;
    ///
    /// let err = Error::SlotDeclined;
    /// assert!(err.is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::QuotaExceeded { .. }
                | Self::StartInPast { .. }
                | Self::InsufficientLeadTime { .. }
                | Self::SlotDeclined
                | Self::InvalidDuration { .. }
                | Self::NotFound { .. }
        )
    }

    /// Check if the error is a database lock timeout.
    ///
    /// Raised when the busy timeout elapses while another process holds the
    /// database lock.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ErrorCode::DatabaseLocked
        )
    }

    /// Check if the error indicates a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtbook::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation for Jan".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
