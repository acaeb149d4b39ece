//! Reservation types for tracking court bookings.
//!
//! This module provides the core [`Reservation`] type together with
//! [`SlotLength`], the fixed set of booking durations a caller may choose
//! from. A reservation occupies the half-open interval
//! `[start_time, end_time)`; the booking planner guarantees stored
//! intervals never overlap.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Starts at or after this hour only get the shorter slot lengths.
const EVENING_CUTOFF_HOUR: u32 = 17;

/// A court reservation.
///
/// Reservations are identified by the booking party's name and their exact
/// start time; the numeric id is assigned by storage on creation. The
/// interval is half-open: a reservation ending at 20:00 does not conflict
/// with one starting at 20:00.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use courtbook::Reservation;
///
/// let start = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(20, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(21, 0, 0).unwrap();
///
/// let reservation = Reservation::new(1, "Jan".to_string(), start, end).unwrap();
/// assert_eq!(reservation.name(), "Jan");
/// assert!(reservation.contains(start));
/// assert!(!reservation.contains(end));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: i64,
    name: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

impl Reservation {
    /// Creates a new reservation.
    ///
    /// The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming, or if the end
    /// time is not strictly after the start time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use courtbook::Reservation;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(20, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(21, 0, 0).unwrap();
    ///
    /// assert!(Reservation::new(1, "Jan".to_string(), start, end).is_ok());
    /// assert!(Reservation::new(1, "  ".to_string(), start, end).is_err());
    /// assert!(Reservation::new(1, "Jan".to_string(), end, start).is_err());
    /// ```
    pub fn new(
        id: i64,
        name: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }
        if end_time <= start_time {
            return Err(ValidationError {
                field: "end_time".into(),
                message: format!("end time {end_time} must be after start time {start_time}"),
            });
        }

        Ok(Self {
            id,
            name,
            start_time,
            end_time,
        })
    }

    /// Returns the storage-assigned id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the name of the booking party.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start of the reserved interval.
    #[must_use]
    pub const fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Returns the end of the reserved interval (exclusive).
    #[must_use]
    pub const fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    /// Checks whether an instant falls inside the reserved interval.
    ///
    /// The interval is half-open: the start is contained, the end is not.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start_time <= instant && instant < self.end_time
    }

    /// Checks whether two reservations occupy overlapping intervals.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use courtbook::Reservation;
    ///
    /// let day = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap();
    /// let a = Reservation::new(
    ///     1,
    ///     "Jan".to_string(),
    ///     day.and_hms_opt(19, 0, 0).unwrap(),
    ///     day.and_hms_opt(20, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// let b = Reservation::new(
    ///     2,
    ///     "Ewa".to_string(),
    ///     day.and_hms_opt(20, 0, 0).unwrap(),
    ///     day.and_hms_opt(21, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// // Back-to-back slots do not overlap.
    /// assert!(!a.overlaps(&b));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.name,
            self.start_time.format("%Y-%m-%d %H:%M"),
            self.end_time.format("%Y-%m-%d %H:%M")
        )
    }
}

/// A fixed booking duration.
///
/// Daytime starts may book 30, 60, or 90 minutes; starts at 17:00 or later
/// only get the 30- and 60-minute options.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use courtbook::SlotLength;
///
/// let afternoon = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(14, 0, 0).unwrap();
/// let evening = NaiveDate::from_ymd_opt(2023, 3, 27).unwrap().and_hms_opt(20, 0, 0).unwrap();
///
/// assert_eq!(SlotLength::options_for(afternoon).len(), 3);
/// assert_eq!(SlotLength::options_for(evening).len(), 2);
/// assert!(!SlotLength::NinetyMinutes.is_offered_at(evening));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLength {
    /// A 30-minute slot.
    HalfHour,
    /// A 60-minute slot.
    Hour,
    /// A 90-minute slot.
    NinetyMinutes,
}

impl SlotLength {
    /// Returns the length in minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::HalfHour => 30,
            Self::Hour => 60,
            Self::NinetyMinutes => 90,
        }
    }

    /// Converts the length to a `chrono::Duration`.
    #[must_use]
    pub fn to_duration(self) -> Duration {
        Duration::minutes(i64::from(self.minutes()))
    }

    /// Parses a length from a minute count.
    ///
    /// Returns `None` for anything other than 30, 60, or 90.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtbook::SlotLength;
    ///
    /// assert_eq!(SlotLength::from_minutes(60), Some(SlotLength::Hour));
    /// assert_eq!(SlotLength::from_minutes(45), None);
    /// ```
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            30 => Some(Self::HalfHour),
            60 => Some(Self::Hour),
            90 => Some(Self::NinetyMinutes),
            _ => None,
        }
    }

    /// Returns the lengths offered for a slot starting at the given time.
    #[must_use]
    pub fn options_for(start: NaiveDateTime) -> &'static [Self] {
        if start.hour() >= EVENING_CUTOFF_HOUR {
            &[Self::HalfHour, Self::Hour]
        } else {
            &[Self::HalfHour, Self::Hour, Self::NinetyMinutes]
        }
    }

    /// Checks whether this length is offered for the given start time.
    #[must_use]
    pub fn is_offered_at(self, start: NaiveDateTime) -> bool {
        Self::options_for(start).contains(&self)
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
