//! Schedule rows: one per Wednesday, annotated by date-exact holiday lookup.

use std::collections::HashMap;

use chrono::NaiveDate;
use wedlunch_calendar::NormalizedDate;
use wedlunch_holidays::Holiday;

use crate::display::format_holiday;

/// Alternating row style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Odd,
    Even,
}

impl RowClass {
    /// `Odd` for even indices (first row), `Even` for odd indices.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Odd } else { Self::Even }
    }

    /// CSS class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

/// One rendered Wednesday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    date: NormalizedDate,
    holiday: Option<String>,
    class: RowClass,
}

impl ScheduleRow {
    /// Returns the normalized Wednesday.
    pub fn date(&self) -> NormalizedDate {
        self.date
    }

    /// Returns the canonical name of the holiday on this date, if any.
    pub fn holiday(&self) -> Option<&str> {
        self.holiday.as_deref()
    }

    /// Returns the row style class.
    pub fn class(&self) -> RowClass {
        self.class
    }

    /// Human-readable label, e.g. `08 Jan 2025`.
    pub fn date_label(&self) -> String {
        self.date.date().format("%d %b %Y").to_string()
    }

    /// Anchor id, e.g. `20250108`.
    pub fn anchor_id(&self) -> String {
        self.date.date().format("%Y%m%d").to_string()
    }

    /// Content cell HTML; empty when there is no mapped holiday.
    pub fn content(&self) -> String {
        self.holiday.as_deref().map(format_holiday).unwrap_or_default()
    }
}

/// Joins `wednesdays` with `holidays` by normalized date.
///
/// Every input date yields exactly one row, in input order. When two
/// holidays share a date, the first one in `holidays` is kept.
pub fn build_schedule(wednesdays: &[NaiveDate], holidays: &[Holiday]) -> Vec<ScheduleRow> {
    let mut lookup: HashMap<NormalizedDate, &str> = HashMap::with_capacity(holidays.len());
    for holiday in holidays {
        lookup.entry(holiday.date()).or_insert(holiday.name());
    }

    wednesdays
        .iter()
        .enumerate()
        .map(|(i, &day)| {
            let date = NormalizedDate::new(day);
            ScheduleRow {
                date,
                holiday: lookup.get(&date).map(|name| (*name).to_string()),
                class: RowClass::for_index(i),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn row_class_alternates() {
        let classes: Vec<&str> = (0..5).map(|i| RowClass::for_index(i).as_str()).collect();
        assert_eq!(classes, ["odd", "even", "odd", "even", "odd"]);
    }

    #[test]
    fn join_by_date() {
        let weds = [ymd(2025, 1, 1), ymd(2025, 1, 8)];
        let hols = [Holiday::new(ymd(2025, 1, 1), "New Year's Day")];
        let rows = build_schedule(&weds, &hols);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].holiday(), Some("New Year's Day"));
        assert_eq!(rows[0].content(), "<p><strong>New Year's Day</strong> 🎆</p>");
        assert_eq!(rows[1].holiday(), None);
        assert_eq!(rows[1].content(), "");
    }

    #[test]
    fn holiday_off_sequence_is_ignored() {
        let weds = [ymd(2025, 1, 8)];
        let hols = [Holiday::new(ymd(2025, 1, 9), "Thursday Thing")];
        let rows = build_schedule(&weds, &hols);
        assert_eq!(rows[0].holiday(), None);
    }

    #[test]
    fn first_holiday_wins_on_collision() {
        let weds = [ymd(2025, 12, 31)];
        let hols = [
            Holiday::new(ymd(2025, 12, 31), "New Year's Eve"),
            Holiday::new(ymd(2025, 12, 31), "Other"),
        ];
        assert_eq!(build_schedule(&weds, &hols)[0].holiday(), Some("New Year's Eve"));
    }

    #[test]
    fn unmapped_holiday_has_empty_content() {
        let weds = [ymd(2025, 3, 5)];
        let hols = [Holiday::new(ymd(2025, 3, 5), "Scistaff Retreat")];
        let rows = build_schedule(&weds, &hols);
        assert_eq!(rows[0].holiday(), Some("Scistaff Retreat"));
        assert_eq!(rows[0].content(), "");
    }

    #[test]
    fn labels() {
        let rows = build_schedule(&[ymd(2025, 1, 8)], &[]);
        assert_eq!(rows[0].date_label(), "08 Jan 2025");
        assert_eq!(rows[0].anchor_id(), "20250108");
    }

    #[test]
    fn empty_input() {
        assert!(build_schedule(&[], &[]).is_empty());
    }
}
