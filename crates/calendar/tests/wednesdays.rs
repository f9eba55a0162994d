use chrono::{Datelike, NaiveDate, Weekday};
use wedlunch_calendar::{NormalizedDate, wednesdays};

/// Brute force: walk every day of the year and keep the Wednesdays.
fn scan(year: i32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        if d.weekday() == Weekday::Wed {
            out.push(d);
        }
        d = d.succ_opt().unwrap();
    }
    out
}

#[test]
fn matches_brute_force_for_many_years() {
    for year in 1900..=2100 {
        assert_eq!(wednesdays(year).unwrap(), scan(year), "year {year}");
    }
}

#[test]
fn consecutive_entries_are_seven_days_apart() {
    for year in [1999, 2000, 2024, 2025, 2026, 2100] {
        let dates = wednesdays(year).unwrap();
        for pair in dates.windows(2) {
            assert_eq!(
                (pair[1] - pair[0]).num_days(),
                7,
                "gap between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn first_within_first_week_last_within_last_week() {
    for year in 2000..=2040 {
        let dates = wednesdays(year).unwrap();
        let first = dates[0];
        let last = *dates.last().unwrap();
        assert_eq!(first.year(), year);
        assert!(first.ordinal() <= 7, "{year}: first {first}");
        assert_eq!(last.year(), year);
        assert_eq!((last + chrono::Days::new(7)).year(), year + 1, "{year}: last {last}");
        assert!(dates.len() == 52 || dates.len() == 53);
    }
}

#[test]
fn year_2025_starts_on_new_years_day() {
    let dates = wednesdays(2025).unwrap();
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
}

#[test]
fn normalized_keys_match_across_sources() {
    let dates = wednesdays(2025).unwrap();
    let from_sequence = NormalizedDate::new(dates[51]);
    let from_feed = NormalizedDate::from_ymd(2025, 12, 24).unwrap();
    assert_eq!(from_sequence, from_feed);
}
