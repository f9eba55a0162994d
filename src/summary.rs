//! Console summary printed after generation.

use wedlunch_holidays::Holiday;
use wedlunch_render::format_holiday;

/// Annual events that have to be added to the page by hand.
const REMINDERS: &[&str] = &[
    "AAS Meetings",
    "Synthesis Imaging Workshop",
    "Summer Student Talks",
    "Scistaff Retreat",
];

/// Lists each Wednesday holiday with the cell content it renders to.
pub fn holiday_summary(year: i32, holidays: &[Holiday]) -> String {
    let mut out = format!("\nHolidays falling on Wednesdays in {year}:\n{}\n", "-".repeat(50));
    for h in holidays {
        out.push_str(&format!("{}: {}\n", h.day().format("%Y-%m-%d"), h.name()));
        out.push_str(&format!("Formatted content: {}\n", format_holiday(h.name())));
    }
    out
}

/// The manual-events reminder block.
pub fn reminders() -> String {
    let mut out = String::from("\nReminder: Don't forget to add annual events such as:\n");
    for r in REMINDERS {
        out.push_str(&format!("- {r}\n"));
    }
    out
}
