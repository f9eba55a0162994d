//! Custom holidays on a fixed month/day every year.

use wedlunch_calendar::NormalizedDate;

use crate::error::HolidayError;
use crate::holiday::{Holiday, HolidaySource};

/// Name of the Dec 24 custom holiday.
pub const CHRISTMAS_EVE: &str = "Christmas Eve";

/// Name of the Dec 31 custom holiday.
pub const NEW_YEARS_EVE: &str = "New Year's Eve";

/// One month/day entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHoliday {
    month: u32,
    day: u32,
    name: String,
}

impl FixedHoliday {
    /// Creates an entry. The month/day pair is checked per year when resolved.
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Self {
        Self {
            month,
            day,
            name: name.into(),
        }
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day of month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A list of [`FixedHoliday`] entries applied to any year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHolidays {
    entries: Vec<FixedHoliday>,
}

impl FixedHolidays {
    /// Creates a source from arbitrary entries.
    pub fn new(entries: Vec<FixedHoliday>) -> Self {
        Self { entries }
    }

    /// Christmas Eve (Dec 24) and New Year's Eve (Dec 31).
    pub fn year_end() -> Self {
        Self::new(vec![
            FixedHoliday::new(12, 24, CHRISTMAS_EVE),
            FixedHoliday::new(12, 31, NEW_YEARS_EVE),
        ])
    }

    /// Returns the configured entries.
    pub fn entries(&self) -> &[FixedHoliday] {
        &self.entries
    }
}

impl Default for FixedHolidays {
    fn default() -> Self {
        Self::year_end()
    }
}

impl HolidaySource for FixedHolidays {
    fn name(&self) -> &str {
        "custom"
    }

    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, HolidayError> {
        self.entries
            .iter()
            .map(|e| {
                NormalizedDate::from_ymd(year, e.month, e.day)
                    .map(|date| Holiday::new(date, e.name.clone()))
                    .map_err(|_| HolidayError::InvalidFixedDate {
                        name: e.name.clone(),
                        year,
                        month: e.month,
                        day: e.day,
                    })
            })
            .collect()
    }
}
