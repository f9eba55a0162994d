//! Error types for wedlunch-holidays.

use wedlunch_calendar::CalendarError;

/// Error type for all fallible operations in the wedlunch-holidays crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a holiday source has no data for the requested year.
    #[error("{source_name} holidays are not available for {year}")]
    UnsupportedYear {
        /// Name of the source that was queried.
        source_name: String,
        /// The requested year.
        year: i32,
    },

    /// Returned when the regional holiday database cannot be loaded or read.
    #[error("holiday database error: {reason}")]
    Database {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a fixed custom holiday does not exist in the requested year.
    #[error("fixed holiday '{name}' has no date {month:02}-{day:02} in {year}")]
    InvalidFixedDate {
        /// Name of the custom holiday.
        name: String,
        /// The requested year.
        year: i32,
        /// Configured month.
        month: u32,
        /// Configured day.
        day: u32,
    },

    /// Wraps a date computation failure from wedlunch-calendar.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

impl From<holidays::Error> for HolidayError {
    fn from(e: holidays::Error) -> Self {
        HolidayError::Database {
            reason: e.to_string(),
        }
    }
}
