//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use chrono::NaiveDateTime;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database statement that will be
/// performed when the plan is executed. Actions carry plain field values
/// rather than [`crate::Reservation`] instances because ids are assigned
/// by storage only at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a new reservation.
    CreateReservation {
        /// The booking party.
        name: String,
        /// Start of the reserved interval.
        start_time: NaiveDateTime,
        /// End of the reserved interval (exclusive).
        end_time: NaiveDateTime,
    },

    /// Delete a reservation by exact (name, start time) match.
    DeleteReservation {
        /// The booking party.
        name: String,
        /// Start of the reservation to delete.
        start_time: NaiveDateTime,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation {
                name,
                start_time,
                end_time,
            } => {
                format!(
                    "Create reservation for {name} from {} to {}",
                    start_time.format("%Y-%m-%d %H:%M"),
                    end_time.format("%Y-%m-%d %H:%M")
                )
            }
            Self::DeleteReservation { name, start_time } => {
                format!(
                    "Delete reservation for {name} at {}",
                    start_time.format("%Y-%m-%d %H:%M")
                )
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtbook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book a court for Jan");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
