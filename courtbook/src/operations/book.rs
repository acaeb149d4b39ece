//! Booking operation planning.
//!
//! This module implements the reservation validator: the weekly quota,
//! lead-time, and overlap rules that gate every new booking, plus the
//! slot negotiation that offers the end of a conflicting reservation as
//! an alternative start.
//!
//! Planning never writes. A successful plan carries exactly one insert
//! action; every rejection path leaves the database untouched.

use chrono::{Duration, NaiveDateTime, NaiveTime, Weekday};
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::{Reservation, SlotLength};

use super::plan::{OperationPlan, PlanAction};

/// Minimum gap between "now" and a booking's start time, in seconds.
pub const MIN_LEAD_TIME_SECS: i64 = 3600;

/// Maximum reservations one name may hold per calendar week.
pub const WEEKLY_QUOTA: i64 = 2;

/// Returns the calendar week containing the given instant as a half-open
/// interval: Monday 00:00 inclusive to the next Monday 00:00 exclusive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use courtbook::operations::week_bounds;
///
/// // 2023-03-29 is a Wednesday
/// let instant = NaiveDate::from_ymd_opt(2023, 3, 29).unwrap().and_hms_opt(14, 0, 0).unwrap();
/// let (start, end) = week_bounds(instant);
/// assert_eq!(start.date(), NaiveDate::from_ymd_opt(2023, 3, 27).unwrap());
/// assert_eq!(end.date(), NaiveDate::from_ymd_opt(2023, 4, 3).unwrap());
/// ```
#[must_use]
pub fn week_bounds(instant: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let week = instant.date().week(Weekday::Mon);
    let start = week.first_day().and_time(NaiveTime::MIN);
    (start, start + Duration::days(7))
}

/// Options for a booking operation.
///
/// This struct contains all the parameters needed to plan a booking.
#[derive(Debug, Clone)]
pub struct BookingOptions {
    /// The name of the booking party.
    pub name: String,

    /// The requested start time (minute precision).
    pub start: NaiveDateTime,

    /// The chosen slot length.
    pub length: SlotLength,
}

impl BookingOptions {
    /// Creates new booking options.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use courtbook::operations::BookingOptions;
    /// use courtbook::SlotLength;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(20, 0, 0).unwrap();
    /// let options = BookingOptions::new("Jan".to_string(), start, SlotLength::Hour);
    /// assert_eq!(options.name, "Jan");
    /// ```
    #[must_use]
    pub const fn new(name: String, start: NaiveDateTime, length: SlotLength) -> Self {
        Self {
            name,
            start,
            length,
        }
    }
}

/// A booking plan generator.
///
/// This struct is responsible for applying the validation rules to a
/// booking request and generating a plan that describes the single insert
/// to perform.
///
/// Overlap resolution is a synchronous negotiation, not an automatic
/// retry: each time the requested slot falls inside an existing
/// reservation, the `accept` callback is asked whether to move the start
/// to that reservation's end. Declining abandons the operation with
/// [`Error::SlotDeclined`].
pub struct BookingPlan {
    options: BookingOptions,
}

impl BookingPlan {
    /// Creates a new booking plan with the given options.
    #[must_use]
    pub const fn new(options: BookingOptions) -> Self {
        Self { options }
    }

    /// Finds the reservation whose interval contains the given start, if any.
    ///
    /// A reservation starting the previous day can still reach past midnight
    /// into the given start, so the scan covers both days.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_conflict(
        conn: &Connection,
        start: NaiveDateTime,
    ) -> Result<Option<Reservation>> {
        let scan_from = start.date() - Duration::days(1);
        let nearby = Database::reservations_between(conn, scan_from, start.date())?;
        Ok(nearby.into_iter().find(|r| r.contains(start)))
    }

    /// Finds the earliest reservation overlapping the interval `[start, end)`,
    /// if any.
    ///
    /// Unlike [`Self::find_conflict`], this catches a candidate whose tail
    /// runs into a later reservation even though its start is free.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_overlap(
        conn: &Connection,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Option<Reservation>> {
        let scan_from = start.date() - Duration::days(1);
        let nearby = Database::reservations_between(conn, scan_from, end.date())?;
        Ok(nearby
            .into_iter()
            .find(|r| r.start_time() < end && start < r.end_time()))
    }

    /// Builds an operation plan for this booking request.
    ///
    /// Rules are applied in order: weekly quota, start-in-future, minimum
    /// lead time, overlap negotiation, slot-length availability, and a
    /// final overlap check of the whole candidate interval. The `accept`
    /// callback drives the negotiation; pass `&mut |_| false` to decline
    /// any offered alternative.
    ///
    /// This method performs validation only and does NOT modify the
    /// database.
    ///
    /// # Errors
    ///
    /// Returns the corresponding rejection (`QuotaExceeded`, `StartInPast`,
    /// `InsufficientLeadTime`, `SlotDeclined`, `InvalidDuration`) or a
    /// database error.
    pub fn build_plan(
        &self,
        conn: &Connection,
        now: NaiveDateTime,
        accept: &mut dyn FnMut(&Reservation) -> bool,
    ) -> Result<OperationPlan> {
        let name = self.options.name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        let requested = self.options.start;

        // Rule 1: weekly quota for the week containing the requested start
        let (week_start, week_end) = week_bounds(requested);
        let count = Database::count_for_name_between(conn, name, week_start, week_end)?;
        if count >= WEEKLY_QUOTA {
            return Err(Error::QuotaExceeded {
                name: name.to_string(),
                count,
            });
        }

        // Rule 2: the start must be strictly in the future
        if requested <= now {
            return Err(Error::StartInPast { start: requested });
        }

        // Rule 3: minimum lead time
        if (requested - now).num_seconds() < MIN_LEAD_TIME_SECS {
            return Err(Error::InsufficientLeadTime { start: requested });
        }

        // Rules 4 and 5: overlap negotiation and slot-length availability.
        // Accepting an offer moves the start to the blocking reservation's
        // end and restarts the checks from there. The candidate interval is
        // re-checked in full once the length is known: a start can be free
        // while the tail still runs into a later reservation, and stored
        // intervals must stay pairwise disjoint.
        let mut start = requested;
        let end = loop {
            if let Some(conflict) = Self::find_conflict(conn, start)? {
                if accept(&conflict) {
                    start = conflict.end_time();
                    continue;
                }
                return Err(Error::SlotDeclined);
            }

            if !self.options.length.is_offered_at(start) {
                return Err(Error::InvalidDuration {
                    minutes: self.options.length.minutes(),
                    start,
                });
            }

            let candidate_end = start + self.options.length.to_duration();
            if let Some(conflict) = Self::find_overlap(conn, start, candidate_end)? {
                if accept(&conflict) {
                    start = conflict.end_time();
                    continue;
                }
                return Err(Error::SlotDeclined);
            }

            break candidate_end;
        };

        let mut plan = OperationPlan::new(format!(
            "Book court for {name} at {}",
            start.format("%Y-%m-%d %H:%M")
        ))
        .add_action(PlanAction::CreateReservation {
            name: name.to_string(),
            start_time: start,
            end_time: end,
        });

        if start != requested {
            plan = plan.add_warning(format!(
                "Requested slot {} was taken; booked at {} instead",
                requested.format("%H:%M"),
                start.format("%H:%M")
            ));
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use crate::operations::PlanExecutor;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // Monday of the test week, long before any requested slot.
    fn now() -> NaiveDateTime {
        dt(27, 8, 0)
    }

    fn book(
        db: &mut Database,
        name: &str,
        start: NaiveDateTime,
        length: SlotLength,
    ) -> Result<Reservation> {
        let options = BookingOptions::new(name.to_string(), start, length);
        let plan = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false)?;
        let result = PlanExecutor::new(db).execute(&plan)?;
        Ok(result.reservation.expect("booking plan must insert"))
    }

    #[test]
    fn test_week_bounds_monday_to_monday() {
        let (start, end) = week_bounds(dt(29, 14, 0));
        assert_eq!(start, dt(27, 0, 0));
        assert_eq!(end, NaiveDate::from_ymd_opt(2023, 4, 3).unwrap().and_time(NaiveTime::MIN));
    }

    #[test]
    fn test_week_bounds_on_monday_midnight() {
        let (start, _) = week_bounds(dt(27, 0, 0));
        assert_eq!(start, dt(27, 0, 0));
    }

    #[test]
    fn test_successful_booking() {
        let mut db = create_test_database();
        let created = book(&mut db, "Jan", dt(27, 20, 0), SlotLength::Hour).unwrap();

        assert_eq!(created.name(), "Jan");
        assert_eq!(created.start_time(), dt(27, 20, 0));
        assert_eq!(created.end_time(), dt(27, 21, 0));
    }

    #[test]
    fn test_quota_allows_two_per_week() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 20, 0), SlotLength::Hour).unwrap();
        book(&mut db, "Jan", dt(28, 10, 0), SlotLength::Hour).unwrap();
    }

    #[test]
    fn test_quota_rejects_third_in_week() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 20, 0), SlotLength::Hour).unwrap();
        book(&mut db, "Jan", dt(28, 10, 0), SlotLength::Hour).unwrap();

        let result = book(&mut db, "Jan", dt(29, 10, 0), SlotLength::Hour);
        assert!(matches!(
            result,
            Err(Error::QuotaExceeded { count: 2, .. })
        ));
    }

    #[test]
    fn test_quota_is_per_name() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 20, 0), SlotLength::Hour).unwrap();
        book(&mut db, "Jan", dt(28, 10, 0), SlotLength::Hour).unwrap();

        // A different name is unaffected by Jan's quota.
        book(&mut db, "Ewa", dt(29, 10, 0), SlotLength::Hour).unwrap();
    }

    #[test]
    fn test_quota_resets_next_week() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 20, 0), SlotLength::Hour).unwrap();
        book(&mut db, "Jan", dt(28, 10, 0), SlotLength::Hour).unwrap();

        // Monday of the following week
        let next_week = NaiveDate::from_ymd_opt(2023, 4, 3)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let options = BookingOptions::new("Jan".to_string(), next_week, SlotLength::Hour);
        let plan = BookingPlan::new(options)
            .build_plan(db.connection(), now(), &mut |_| false)
            .unwrap();
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_rejects_start_in_past() {
        let db = create_test_database();
        let options = BookingOptions::new("Jan".to_string(), dt(27, 7, 0), SlotLength::Hour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::StartInPast { .. })));
    }

    #[test]
    fn test_rejects_start_equal_to_now() {
        let db = create_test_database();
        let options = BookingOptions::new("Jan".to_string(), now(), SlotLength::Hour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::StartInPast { .. })));
    }

    #[test]
    fn test_rejects_insufficient_lead_time() {
        let db = create_test_database();
        let options = BookingOptions::new("Jan".to_string(), dt(27, 8, 59), SlotLength::Hour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::InsufficientLeadTime { .. })));
    }

    #[test]
    fn test_accepts_exactly_one_hour_ahead() {
        let db = create_test_database();
        let options = BookingOptions::new("Jan".to_string(), dt(27, 9, 0), SlotLength::Hour);
        let plan = BookingPlan::new(options)
            .build_plan(db.connection(), now(), &mut |_| false)
            .unwrap();
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_rejects_empty_name() {
        let db = create_test_database();
        let options = BookingOptions::new("  ".to_string(), dt(27, 20, 0), SlotLength::Hour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_find_conflict() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 20, 0), SlotLength::Hour).unwrap();

        let conflict = BookingPlan::find_conflict(db.connection(), dt(27, 20, 30))
            .unwrap()
            .unwrap();
        assert_eq!(conflict.name(), "Jan");

        // The end of the interval is free (half-open)
        assert!(BookingPlan::find_conflict(db.connection(), dt(27, 21, 0))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_conflict_declined_abandons() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 14, 0), SlotLength::Hour).unwrap();

        let options = BookingOptions::new("Ewa".to_string(), dt(27, 14, 30), SlotLength::Hour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::SlotDeclined)));

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_conflict_accepted_moves_to_end() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 14, 0), SlotLength::Hour).unwrap();

        let options = BookingOptions::new("Ewa".to_string(), dt(27, 14, 30), SlotLength::Hour);
        let plan = BookingPlan::new(options)
            .build_plan(db.connection(), now(), &mut |_| true)
            .unwrap();

        assert_eq!(
            plan.actions[0],
            PlanAction::CreateReservation {
                name: "Ewa".to_string(),
                start_time: dt(27, 15, 0),
                end_time: dt(27, 16, 0),
            }
        );
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_negotiation_walks_consecutive_slots() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 14, 0), SlotLength::Hour).unwrap();
        book(&mut db, "Ewa", dt(27, 15, 0), SlotLength::Hour).unwrap();

        let mut offers = Vec::new();
        let options = BookingOptions::new("Ola".to_string(), dt(27, 14, 30), SlotLength::Hour);
        let plan = BookingPlan::new(options)
            .build_plan(db.connection(), now(), &mut |conflict| {
                offers.push(conflict.name().to_string());
                true
            })
            .unwrap();

        // Both blocking reservations were offered in turn.
        assert_eq!(offers, vec!["Jan".to_string(), "Ewa".to_string()]);
        assert_eq!(
            plan.actions[0],
            PlanAction::CreateReservation {
                name: "Ola".to_string(),
                start_time: dt(27, 16, 0),
                end_time: dt(27, 17, 0),
            }
        );
    }

    #[test]
    fn test_evening_rejects_ninety_minutes() {
        let db = create_test_database();
        let options =
            BookingOptions::new("Jan".to_string(), dt(27, 18, 0), SlotLength::NinetyMinutes);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(
            result,
            Err(Error::InvalidDuration { minutes: 90, .. })
        ));
    }

    #[test]
    fn test_duration_checked_against_resolved_start() {
        let mut db = create_test_database();
        // 16:00-17:00 is taken; accepting the offer moves the start to 17:00,
        // where the 90-minute option is no longer available.
        book(&mut db, "Jan", dt(27, 16, 0), SlotLength::Hour).unwrap();

        let options =
            BookingOptions::new("Ewa".to_string(), dt(27, 16, 30), SlotLength::NinetyMinutes);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| true);
        assert!(matches!(result, Err(Error::InvalidDuration { .. })));
    }

    #[test]
    fn test_tail_overlap_declined() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 15, 0), SlotLength::Hour).unwrap();

        // 14:30 itself is free, but 90 minutes from there runs into Jan's
        // slot.
        let options =
            BookingOptions::new("Ewa".to_string(), dt(27, 14, 30), SlotLength::NinetyMinutes);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::SlotDeclined)));

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_tail_overlap_accepted_moves_to_end() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 15, 0), SlotLength::Hour).unwrap();

        let options =
            BookingOptions::new("Ewa".to_string(), dt(27, 14, 30), SlotLength::NinetyMinutes);
        let plan = BookingPlan::new(options)
            .build_plan(db.connection(), now(), &mut |_| true)
            .unwrap();

        assert_eq!(
            plan.actions[0],
            PlanAction::CreateReservation {
                name: "Ewa".to_string(),
                start_time: dt(27, 16, 0),
                end_time: dt(27, 17, 30),
            }
        );
    }

    #[test]
    fn test_find_overlap_catches_tail_collision() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 15, 0), SlotLength::Hour).unwrap();

        let hit = BookingPlan::find_overlap(db.connection(), dt(27, 14, 30), dt(27, 16, 0))
            .unwrap()
            .unwrap();
        assert_eq!(hit.name(), "Jan");

        // Back-to-back is clean (half-open intervals).
        assert!(
            BookingPlan::find_overlap(db.connection(), dt(27, 14, 0), dt(27, 15, 0))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_conflict_seen_across_midnight() {
        let mut db = create_test_database();
        // Ends at 00:30 the next day.
        book(&mut db, "Jan", dt(27, 23, 30), SlotLength::Hour).unwrap();

        let options = BookingOptions::new("Ewa".to_string(), dt(28, 0, 0), SlotLength::HalfHour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::SlotDeclined)));
    }

    #[test]
    fn test_tail_overlap_across_midnight() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(28, 0, 0), SlotLength::Hour).unwrap();

        // Starts free at 23:30 but ends at 00:30 inside Jan's slot.
        let options = BookingOptions::new("Ewa".to_string(), dt(27, 23, 30), SlotLength::Hour);
        let result = BookingPlan::new(options).build_plan(db.connection(), now(), &mut |_| false);
        assert!(matches!(result, Err(Error::SlotDeclined)));
    }

    #[test]
    fn test_bookings_never_overlap() {
        let mut db = create_test_database();
        book(&mut db, "Jan", dt(27, 14, 0), SlotLength::NinetyMinutes).unwrap();
        book(&mut db, "Ewa", dt(27, 15, 30), SlotLength::Hour).unwrap();
        // Conflicting request resolved by negotiation
        let options = BookingOptions::new("Ola".to_string(), dt(27, 15, 0), SlotLength::HalfHour);
        let plan = BookingPlan::new(options)
            .build_plan(db.connection(), now(), &mut |_| true)
            .unwrap();
        PlanExecutor::new(&mut db).execute(&plan).unwrap();

        let all = Database::list_all_reservations(db.connection()).unwrap();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }
}
