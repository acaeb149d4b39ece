//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::Reservation;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation that was created, if the plan inserted one.
    pub reservation: Option<Reservation>,
}

impl ExecutionResult {
    fn success(plan: &OperationPlan, reservation: Option<Reservation>) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation,
        }
    }

    fn dry_run(plan: &OperationPlan) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation: None,
        }
    }
}

/// Executes operation plans against the database.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes).
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use courtbook::operations::{BookingOptions, BookingPlan, PlanExecutor};
/// use courtbook::{Database, DatabaseConfig, SlotLength};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/courtbook.db")).unwrap();
/// let day = NaiveDate::from_ymd_opt(2023, 3, 28).unwrap();
/// let now = day.and_hms_opt(9, 0, 0).unwrap();
///
/// let options = BookingOptions::new(
///     "Jan".to_string(),
///     day.and_hms_opt(14, 0, 0).unwrap(),
///     SlotLength::Hour,
/// );
/// let plan = BookingPlan::new(options)
///     .build_plan(db.connection(), now, &mut |_| false)
///     .unwrap();
///
/// let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
/// assert!(result.success);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not modify
    /// the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. A failed delete
    /// (no matching row) surfaces as [`Error::NotFound`].
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::dry_run(plan));
        }

        let mut created = None;
        for action in &plan.actions {
            if let Some(reservation) = self.execute_action(action)? {
                created = Some(reservation);
            }
        }

        Ok(ExecutionResult::success(plan, created))
    }

    /// Executes a single action.
    ///
    /// Returns `Ok(Some(reservation))` for inserts, `Ok(None)` otherwise.
    fn execute_action(&mut self, action: &PlanAction) -> Result<Option<Reservation>> {
        match action {
            PlanAction::CreateReservation {
                name,
                start_time,
                end_time,
            } => {
                let reservation = self.db.insert_reservation(name, *start_time, *end_time)?;
                Ok(Some(reservation))
            }
            PlanAction::DeleteReservation { name, start_time } => {
                let deleted = self.db.delete_reservation(name, *start_time)?;
                if !deleted {
                    return Err(Error::NotFound {
                        resource: format!(
                            "reservation for '{name}' at {}",
                            start_time.format("%Y-%m-%d %H:%M")
                        ),
                    });
                }
                Ok(None)
            }
        }
    }
}
