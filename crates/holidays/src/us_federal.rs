//! US federal public holidays, read from the `holidays` crate database.

use std::sync::OnceLock;

use chrono::NaiveDate;
use holidays::Country;
use tracing::debug;
use wedlunch_calendar::CalendarError;

use crate::error::HolidayError;
use crate::holiday::{Holiday, HolidaySource};

/// Outcome of the one-time database load, shared by every query.
static DATABASE: OnceLock<Result<(), String>> = OnceLock::new();

fn ensure_loaded() -> Result<(), HolidayError> {
    DATABASE
        .get_or_init(|| {
            debug!("loading US holiday database");
            holidays::Builder::new()
                .countries(&[Country::US])
                .init()
                .map_err(|e| e.to_string())
        })
        .clone()
        .map_err(|reason| HolidayError::Database { reason })
}

fn jan1(year: i32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::YearOutOfRange { year })
}

/// The US federal holiday calendar.
///
/// Holidays on a weekend carry a separate observed entry named
/// `"<name> (Observed)"` on the adjacent Friday or Monday. An observed
/// New Year's Day on December 31 belongs to the year in which it falls.
///
/// Years without data (the database covers 2000 through 2030) are rejected
/// with [`HolidayError::UnsupportedYear`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UsFederal;

impl HolidaySource for UsFederal {
    fn name(&self) -> &str {
        "US federal"
    }

    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, HolidayError> {
        ensure_loaded()?;

        let since = jan1(year)?;
        let until = jan1(year + 1)?;

        // `iter` stops quietly at a missing year, so ask for it explicitly first.
        holidays::contains(Country::US, since).map_err(|e| match e {
            holidays::Error::YearNotAvailable => HolidayError::UnsupportedYear {
                source_name: self.name().to_string(),
                year,
            },
            other => other.into(),
        })?;

        let mut out: Vec<Holiday> = holidays::iter(Country::US, since, until)?
            .map(|h| Holiday::new(h.date, h.name))
            .collect();
        out.sort();

        debug!(year, count = out.len(), "US federal holidays loaded");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn find(list: &[Holiday], name: &str) -> Vec<NaiveDate> {
        list.iter()
            .filter(|h| h.name() == name)
            .map(|h| h.day())
            .collect()
    }

    #[test]
    fn year_2025() {
        let list = UsFederal.holidays(2025).unwrap();
        let got: Vec<(NaiveDate, &str)> = list.iter().map(|h| (h.day(), h.name())).collect();
        assert_eq!(
            got,
            [
                (ymd(2025, 1, 1), "New Year's Day"),
                (ymd(2025, 1, 20), "Martin Luther King Jr. Day"),
                (ymd(2025, 2, 17), "Washington's Birthday"),
                (ymd(2025, 5, 26), "Memorial Day"),
                (ymd(2025, 6, 19), "Juneteenth National Independence Day"),
                (ymd(2025, 7, 4), "Independence Day"),
                (ymd(2025, 9, 1), "Labor Day"),
                (ymd(2025, 10, 13), "Columbus Day"),
                (ymd(2025, 11, 11), "Veterans Day"),
                (ymd(2025, 11, 27), "Thanksgiving"),
                (ymd(2025, 12, 25), "Christmas Day"),
            ]
        );
    }

    #[test]
    fn saturday_observed_on_friday() {
        // Jul 4, 2026 is a Saturday.
        let list = UsFederal.holidays(2026).unwrap();
        assert_eq!(find(&list, "Independence Day"), [ymd(2026, 7, 4)]);
        assert_eq!(find(&list, "Independence Day (Observed)"), [ymd(2026, 7, 3)]);
        assert_eq!(find(&list, "Veterans Day"), [ymd(2026, 11, 11)]);
    }

    #[test]
    fn new_years_observed_in_previous_year() {
        // Jan 1, 2022 is a Saturday.
        let list = UsFederal.holidays(2021).unwrap();
        assert_eq!(find(&list, "New Year's Day (Observed)"), [ymd(2021, 12, 31)]);
        let next = UsFederal.holidays(2022).unwrap();
        assert!(find(&next, "New Year's Day (Observed)").is_empty());
    }

    #[test]
    fn juneteenth_from_2021() {
        assert!(find(&UsFederal.holidays(2020).unwrap(), "Juneteenth National Independence Day").is_empty());
        assert_eq!(
            find(&UsFederal.holidays(2021).unwrap(), "Juneteenth National Independence Day"),
            [ymd(2021, 6, 19)]
        );
    }

    #[test]
    fn covered_years_stay_inside_the_year() {
        for year in 2000..=2030 {
            let list = UsFederal.holidays(year).unwrap();
            assert!(list.len() >= 10, "{year}: {} holidays", list.len());
            assert!(list.iter().all(|h| h.day().year() == year), "{year}");
            assert!(list.windows(2).all(|w| w[0] <= w[1]), "{year}: not sorted");
        }
    }

    #[test]
    fn thanksgiving_is_a_thursday() {
        for year in 2000..=2030 {
            let days = find(&UsFederal.holidays(year).unwrap(), "Thanksgiving");
            assert_eq!(days.len(), 1, "{year}");
            assert_eq!(days[0].weekday(), Weekday::Thu, "{year}");
        }
    }

    #[test]
    fn years_without_data_are_rejected() {
        for year in [1999, 2031, 2150] {
            assert_eq!(
                UsFederal.holidays(year).unwrap_err(),
                HolidayError::UnsupportedYear {
                    source_name: "US federal".to_string(),
                    year,
                }
            );
        }
    }

    #[test]
    fn unrepresentable_year() {
        assert!(matches!(
            UsFederal.holidays(i32::MAX).unwrap_err(),
            HolidayError::Calendar(CalendarError::YearOutOfRange { .. })
        ));
    }
}
