//! Weekly date enumeration.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Returns every Wednesday of `year`, ascending.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if January 1 of `year` cannot be
/// represented.
///
/// # Example
///
/// ```
/// use chrono::Datelike;
/// use wedlunch_calendar::wednesdays;
///
/// let dates = wednesdays(2025).unwrap();
/// assert_eq!(dates.len(), 53);
/// assert_eq!((dates[0].month(), dates[0].day()), (1, 1));
/// ```
pub fn wednesdays(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    weekdays_in_year(year, Weekday::Wed)
}

/// Returns every occurrence of `weekday` in `year`, ascending.
///
/// The first occurrence is found by weekday offset from January 1; later
/// ones follow in 7-day steps until the year changes.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if January 1 of `year` or the
/// first occurrence cannot be represented.
pub fn weekdays_in_year(year: i32, weekday: Weekday) -> Result<Vec<NaiveDate>, CalendarError> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::YearOutOfRange { year })?;
    let offset =
        (7 + weekday.num_days_from_monday() - jan1.weekday().num_days_from_monday()) % 7;
    let mut current = jan1
        .checked_add_days(Days::new(u64::from(offset)))
        .ok_or(CalendarError::YearOutOfRange { year })?;

    let mut dates = Vec::with_capacity(53);
    while current.year() == year {
        dates.push(current);
        match current.checked_add_days(Days::new(7)) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(dates)
}
