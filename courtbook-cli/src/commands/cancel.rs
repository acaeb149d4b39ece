//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which removes a reservation
//! matched by exact name and start time.

use crate::error::CliError;
use crate::utils::{local_now, open_database, parse_datetime, GlobalOptions};
use clap::Args;
use courtbook::{CancelOptions, CancelPlan, PlanExecutor};

/// Cancel an existing reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Name the reservation was booked under
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Exact start time of the reservation (DD.MM.YYYY HH:MM)
    #[arg(long, value_name = "TIMESTAMP")]
    pub start: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let start = parse_datetime(&self.start)?;

        let mut db = open_database(global)?;

        let options = CancelOptions::new(self.name, start);
        let plan = CancelPlan::new(options).build_plan(db.connection(), local_now())?;

        PlanExecutor::new(&mut db).execute(&plan)?;

        println!(
            "Cancelled reservation at {}",
            start.format("%d.%m.%Y %H:%M")
        );
        Ok(())
    }
}
