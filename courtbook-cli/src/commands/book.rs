//! Book command implementation.
//!
//! This module implements the `book` command, which books a court slot for
//! a name at a requested start time. When the requested slot conflicts with
//! an existing reservation, the command offers the conflicting reservation's
//! end time as an alternative start: interactively via a yes/no prompt, or
//! non-interactively via `--take-next` / `--decline`.

use crate::error::CliError;
use crate::utils::{local_now, open_database, parse_datetime, GlobalOptions};
use clap::Args;
use courtbook::{BookingOptions, BookingPlan, PlanExecutor, Reservation, SlotLength};
use std::io::{BufRead, Write};

/// Book a court slot.
#[derive(Args)]
pub struct BookCommand {
    /// Name to book under
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Start time (DD.MM.YYYY HH:MM)
    #[arg(long, value_name = "TIMESTAMP")]
    pub start: String,

    /// Slot length in minutes (30, 60, or 90; only 30 and 60 from 17:00)
    #[arg(long, value_name = "MINUTES")]
    pub minutes: u32,

    /// Always accept the offered alternative slot on conflict
    #[arg(long, conflicts_with = "decline")]
    pub take_next: bool,

    /// Abandon the booking on the first conflict
    #[arg(long)]
    pub decline: bool,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

/// Asks on stdout whether to accept the offered slot, reading the answer
/// from stdin. Anything other than `y`/`yes` declines.
fn prompt_accept(conflict: &Reservation) -> bool {
    print!(
        "Slot is taken until {}. Book at {} instead? [y/N] ",
        conflict.end_time().format("%H:%M"),
        conflict.end_time().format("%d.%m.%Y %H:%M")
    );
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate arguments
        let start = parse_datetime(&self.start)?;
        let length = SlotLength::from_minutes(self.minutes).ok_or_else(|| {
            CliError::InvalidArguments(format!(
                "slot length must be 30, 60, or 90 minutes (got {})",
                self.minutes
            ))
        })?;

        // 2. Open database
        let mut db = open_database(global)?;

        // 3. Build the plan, negotiating conflicts per the chosen policy
        let options = BookingOptions::new(self.name, start, length);
        let mut accept: Box<dyn FnMut(&Reservation) -> bool> = if self.take_next {
            Box::new(|_| true)
        } else if self.decline {
            Box::new(|_| false)
        } else {
            Box::new(prompt_accept)
        };
        let plan = BookingPlan::new(options).build_plan(db.connection(), local_now(), &mut accept)?;

        // 4. Execute (or dry-run) the plan
        let mut executor = PlanExecutor::new(&mut db);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan)?;

        // 5. Report the outcome
        for warning in &result.warnings {
            eprintln!("Warning: {warning}");
        }
        if result.dry_run {
            println!("Dry run; no changes made:");
            for action in &result.actions_taken {
                println!("  {action}");
            }
        } else if let Some(reservation) = result.reservation {
            println!(
                "Booked court for {} from {} to {}",
                reservation.name(),
                reservation.start_time().format("%d.%m.%Y %H:%M"),
                reservation.end_time().format("%d.%m.%Y %H:%M")
            );
        }

        Ok(())
    }
}
