//! Short labels and glyphs for holiday names.

use wedlunch_holidays::{CHRISTMAS_EVE, NEW_YEARS_EVE};

/// How a holiday is shown in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDisplay {
    /// Bold label text.
    pub label: &'static str,
    /// Emoji after the label; may be empty.
    pub glyph: &'static str,
}

const fn entry(
    name: &'static str,
    label: &'static str,
    glyph: &'static str,
) -> (&'static str, HolidayDisplay) {
    (name, HolidayDisplay { label, glyph })
}

static DISPLAY_TABLE: &[(&str, HolidayDisplay)] = &[
    entry("New Year's Day", "New Year's Day", "🎆"),
    entry("Martin Luther King Jr. Day", "MLK Day", ""),
    entry("Washington's Birthday", "President's Day", ""),
    entry("Memorial Day", "Memorial Day", ""),
    entry("Juneteenth National Independence Day", "Juneteenth", ""),
    entry("Independence Day", "July 4", "🎆"),
    entry("Labor Day", "Labor Day", ""),
    entry("Columbus Day", "Indigenous People's Day", ""),
    entry("Veterans Day", "Veterans Day", ""),
    entry("Thanksgiving", "Thanksgiving", "🥧"),
    entry("Christmas Day", "Christmas", "🎄"),
    entry(CHRISTMAS_EVE, "Christmas Eve", "🎄"),
    entry(NEW_YEARS_EVE, "New Year's Eve", "🎆"),
];

/// Looks up the display for a canonical holiday name.
pub fn display_for(name: &str) -> Option<HolidayDisplay> {
    DISPLAY_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, display)| *display)
}

/// Formats the content cell for a holiday.
///
/// Returns `<p><strong>{label}</strong> {glyph}</p>`, or an empty string for
/// names outside the table.
pub fn format_holiday(name: &str) -> String {
    match display_for(name) {
        Some(HolidayDisplay { label, glyph }) => {
            format!("<p><strong>{label}</strong> {glyph}</p>")
        }
        None => String::new(),
    }
}
