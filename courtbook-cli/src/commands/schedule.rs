//! Schedule command implementation.
//!
//! This module implements the `schedule` command, which prints the day-by-day
//! schedule report for a date range.

use crate::error::CliError;
use crate::utils::{local_now, open_database, parse_date, GlobalOptions};
use clap::Args;
use courtbook::render_schedule;

/// Print the schedule for a date range.
#[derive(Args)]
pub struct ScheduleCommand {
    /// First day of the range (DD.MM.YYYY)
    #[arg(long, value_name = "DATE")]
    pub from: String,

    /// Last day of the range, inclusive (DD.MM.YYYY)
    #[arg(long, value_name = "DATE")]
    pub to: String,
}

impl ScheduleCommand {
    /// Execute the schedule command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let from = parse_date(&self.from)?;
        let to = parse_date(&self.to)?;

        let db = open_database(global)?;

        let report = render_schedule(db.connection(), from, to, local_now().date())?;
        print!("{report}");
        Ok(())
    }
}
