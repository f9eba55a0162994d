//! Holiday entry and the source trait.

use chrono::NaiveDate;
use wedlunch_calendar::NormalizedDate;

use crate::error::HolidayError;

/// A named holiday on a noon-normalized date.
///
/// Ordering is by date, then name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Holiday {
    date: NormalizedDate,
    name: String,
}

impl Holiday {
    /// Creates a holiday; the date is normalized to noon.
    pub fn new(date: impl Into<NormalizedDate>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
        }
    }

    /// Returns the normalized date.
    pub fn date(&self) -> NormalizedDate {
        self.date
    }

    /// Returns the calendar day.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when the holiday falls on a Wednesday.
    pub fn is_wednesday(&self) -> bool {
        self.date.is_wednesday()
    }
}

/// A feed of holidays keyed by year.
pub trait HolidaySource {
    /// Short name used in diagnostics and errors.
    fn name(&self) -> &str;

    /// Returns every holiday this source knows for `year`, in any order.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError`] when the source cannot answer for `year`.
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, HolidayError>;
}
