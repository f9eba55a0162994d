//! Error types for the wedlunch-calendar crate.

/// Error type for all fallible operations in the wedlunch-calendar crate.
///
/// Every variant describes a date that cannot be represented, either because
/// the year lies outside the range supported by `chrono` or because the
/// month/day combination does not exist.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year cannot be represented as a calendar date.
    #[error("year {year} is out of the representable date range")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a year/month/day triple is not a valid calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 999_999 };
        assert_eq!(
            err.to_string(),
            "year 999999 is out of the representable date range"
        );
    }

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2025,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid date: 2025-02-29");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
