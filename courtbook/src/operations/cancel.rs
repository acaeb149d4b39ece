//! Cancellation operation planning.
//!
//! Cancellation matches a reservation by exact (name, start time) pair and
//! is subject to the same one-hour lead-time rule as booking: once a
//! reservation is less than an hour away it can no longer be cancelled.

use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};

use super::book::MIN_LEAD_TIME_SECS;
use super::plan::{OperationPlan, PlanAction};

/// Options for a cancellation operation.
#[derive(Debug, Clone)]
pub struct CancelOptions {
    /// The name the reservation was booked under.
    pub name: String,

    /// The exact start time of the reservation (minute precision).
    pub start: NaiveDateTime,
}

impl CancelOptions {
    /// Creates new cancellation options.
    #[must_use]
    pub const fn new(name: String, start: NaiveDateTime) -> Self {
        Self { name, start }
    }
}

/// A cancellation plan generator.
///
/// Looks up the reservation, checks the lead-time rule, and produces a plan
/// with a single delete action. Planning never writes; a rejected
/// cancellation leaves the row in place.
pub struct CancelPlan {
    options: CancelOptions,
}

impl CancelPlan {
    /// Creates a new cancellation plan with the given options.
    #[must_use]
    pub const fn new(options: CancelOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this cancellation request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation matches the (name,
    /// start time) pair exactly, [`Error::InsufficientLeadTime`] if the
    /// reservation starts less than an hour from `now`, or a database error.
    pub fn build_plan(&self, conn: &Connection, now: NaiveDateTime) -> Result<OperationPlan> {
        let name = self.options.name.trim();
        let start = self.options.start;

        let reservation = Database::find_reservation(conn, name, start)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!(
                    "reservation for '{name}' at {}",
                    start.format("%Y-%m-%d %H:%M")
                ),
            }
        })?;

        if (start - now).num_seconds() < MIN_LEAD_TIME_SECS {
            return Err(Error::InsufficientLeadTime { start });
        }

        let plan = OperationPlan::new(format!(
            "Cancel reservation for {name} at {}",
            start.format("%Y-%m-%d %H:%M")
        ))
        .add_action(PlanAction::DeleteReservation {
            name: reservation.name().to_string(),
            start_time: reservation.start_time(),
        });

        Ok(plan)
    }
}
