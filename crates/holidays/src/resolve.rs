//! Merge holiday feeds down to the ones falling on a Wednesday.

use tracing::debug;

use crate::error::HolidayError;
use crate::holiday::{Holiday, HolidaySource};

/// Queries every source for `year` and keeps the Wednesday entries.
///
/// Each source's dates are already noon-normalized by [`Holiday::new`], so
/// entries from different sources compare on the same footing. The result
/// is sorted by date, then name.
///
/// # Errors
///
/// The first source error is returned unchanged; no partial list is
/// produced.
pub fn resolve_wednesday_holidays(
    year: i32,
    sources: &[&dyn HolidaySource],
) -> Result<Vec<Holiday>, HolidayError> {
    let mut matched = Vec::new();
    for source in sources {
        let entries = source.holidays(year)?;
        debug!(source = source.name(), year, n = entries.len(), "holiday source queried");
        for holiday in entries.into_iter().filter(Holiday::is_wednesday) {
            debug!(
                source = source.name(),
                name = holiday.name(),
                date = %holiday.date(),
                "found Wednesday holiday"
            );
            matched.push(holiday);
        }
    }
    matched.sort();
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    struct Static(Vec<Holiday>);

    impl HolidaySource for Static {
        fn name(&self) -> &str {
            "static"
        }

        fn holidays(&self, _year: i32) -> Result<Vec<Holiday>, HolidayError> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    impl HolidaySource for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn holidays(&self, year: i32) -> Result<Vec<Holiday>, HolidayError> {
            Err(HolidayError::UnsupportedYear {
                source_name: "broken".to_string(),
                year,
            })
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn keeps_only_wednesdays() {
        let src = Static(vec![
            Holiday::new(ymd(2025, 1, 1), "Wed"),
            Holiday::new(ymd(2025, 1, 2), "Thu"),
            Holiday::new(ymd(2025, 1, 7), "Tue"),
        ]);
        let out = resolve_wednesday_holidays(2025, &[&src]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "Wed");
    }

    #[test]
    fn merges_and_sorts_across_sources() {
        let a = Static(vec![Holiday::new(ymd(2025, 12, 31), "Late")]);
        let b = Static(vec![Holiday::new(ymd(2025, 1, 8), "Early")]);
        let out = resolve_wednesday_holidays(2025, &[&a, &b]).unwrap();
        let names: Vec<&str> = out.iter().map(Holiday::name).collect();
        assert_eq!(names, ["Early", "Late"]);
    }

    #[test]
    fn source_error_propagates() {
        let ok = Static(vec![Holiday::new(ymd(2025, 1, 1), "Wed")]);
        let err = resolve_wednesday_holidays(2025, &[&ok, &Broken]).unwrap_err();
        assert!(matches!(err, HolidayError::UnsupportedYear { year: 2025, .. }));
    }

    #[test]
    fn no_sources() {
        assert!(resolve_wednesday_holidays(2025, &[]).unwrap().is_empty());
    }
}
