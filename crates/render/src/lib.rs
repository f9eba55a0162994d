//! # wedlunch-render
//!
//! Joins the Wednesday sequence with resolved holidays and emits the HTML
//! fragment for the schedule page.
//!
//! ```text
//! &[NaiveDate] ──┐
//!                ├─ build_schedule() ─> Vec<ScheduleRow> ─ render_page() ─> String
//! &[Holiday] ────┘                                           ▲
//!                                                  PageConfig (contact, StyleConfig)
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `display` | Canonical name -> (label, glyph) table |
//! | `schedule` | Row model and the date join |
//! | `style` | Inline CSS for the two table columns |
//! | `page` | Header, table body and footer |

mod display;
mod page;
mod schedule;
mod style;

pub use display::{HolidayDisplay, display_for, format_holiday};
pub use page::{PageConfig, render_page};
pub use schedule::{RowClass, ScheduleRow, build_schedule};
pub use style::StyleConfig;
