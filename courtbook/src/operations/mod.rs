//! Reservation operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for booking and cancellation,
//! separating planning from execution to enable dry-run mode, better testing,
//! and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Analyzes the request, validates constraints, builds a plan
//! 2. **Execution**: Takes the plan and performs actual database operations
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use courtbook::operations::{BookingOptions, BookingPlan, PlanExecutor};
//! use courtbook::{Database, DatabaseConfig, SlotLength};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/courtbook.db")).unwrap();
//! let day = NaiveDate::from_ymd_opt(2023, 3, 28).unwrap();
//! let now = day.and_hms_opt(9, 0, 0).unwrap();
//!
//! let options = BookingOptions::new(
//!     "Jan".to_string(),
//!     day.and_hms_opt(14, 0, 0).unwrap(),
//!     SlotLength::Hour,
//! );
//!
//! // Generate plan, declining any offered alternative slot
//! let plan = BookingPlan::new(options)
//!     .build_plan(db.connection(), now, &mut |_| false)
//!     .unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
//! assert!(result.success);
//! ```

pub mod book;
pub mod cancel;
pub mod executor;
pub mod plan;

pub use book::{week_bounds, BookingOptions, BookingPlan, MIN_LEAD_TIME_SECS, WEEKLY_QUOTA};
pub use cancel::{CancelOptions, CancelPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
