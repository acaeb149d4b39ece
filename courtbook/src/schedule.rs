//! Schedule reporting.
//!
//! Renders the reservations in a date range as a day-by-day text report.
//! Days close to the reference date get relative labels (`Today:`,
//! `Tomorrow:`); every other day is labeled with its weekday name. Days
//! without reservations are listed explicitly as `No Reservations`.

use chrono::{Duration, NaiveDate};
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};

/// Returns the report label for a day relative to `today`.
fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today:".to_string()
    } else if day == today + Duration::days(1) {
        "Tomorrow:".to_string()
    } else {
        format!("{}:", day.format("%A"))
    }
}

/// Renders the schedule for the inclusive date range `[from, to]`.
///
/// Each day in the range is listed in order with its label, its
/// reservations sorted by start time (`* <name> <start> - <end>`, minute
/// precision), or `No Reservations` if the day is empty. Days are
/// separated by blank lines.
///
/// # Errors
///
/// Returns [`Error::InvalidDateRange`] if `from > to`, or a database error
/// if a query fails.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use courtbook::schedule::render_schedule;
/// use courtbook::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/courtbook.db")).unwrap();
/// let today = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap();
/// let report = render_schedule(db.connection(), today, today, today).unwrap();
/// println!("{report}");
/// ```
pub fn render_schedule(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
) -> Result<String> {
    if from > to {
        return Err(Error::InvalidDateRange { from, to });
    }

    let mut output = String::new();
    let mut day = from;
    while day <= to {
        if day != from {
            output.push('\n');
        }

        output.push_str(&day_label(day, today));
        output.push('\n');

        let reservations = Database::reservations_on(conn, day)?;
        if reservations.is_empty() {
            output.push_str("No Reservations\n");
        } else {
            for reservation in &reservations {
                output.push_str(&format!(
                    "* {} {} - {}\n",
                    reservation.name(),
                    reservation.start_time().format("%Y-%m-%d %H:%M"),
                    reservation.end_time().format("%Y-%m-%d %H:%M")
                ));
            }
        }

        day += Duration::days(1);
    }

    Ok(output)
}
