//! Noon-normalized calendar date.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::CalendarError;

/// A calendar day pinned to 12:00:00.
///
/// Holiday feeds and the Wednesday sequence are compared through this type,
/// so both sides go through the same constructor before any equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedDate(NaiveDateTime);

/// 12:00:00, the canonical time-of-day.
fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("12:00:00 is a valid time")
}

impl NormalizedDate {
    /// Pins `date` to noon.
    pub fn new(date: NaiveDate) -> Self {
        Self(date.and_time(noon()))
    }

    /// Creates a normalized date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple is not a valid
    /// calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::new)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Re-normalizes an arbitrary timestamp to noon of the same day.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.date())
    }

    /// Returns the calendar day.
    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the full noon timestamp.
    pub fn datetime(self) -> NaiveDateTime {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns `true` when the date falls on a Wednesday.
    pub fn is_wednesday(self) -> bool {
        self.weekday() == Weekday::Wed
    }
}

impl From<NaiveDate> for NormalizedDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
