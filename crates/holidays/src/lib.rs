//! # wedlunch-holidays
//!
//! Holiday feeds for the Wednesday Lunch schedule and the merge step that
//! keeps the ones landing on a Wednesday.
//!
//! The US federal feed is read from the `holidays` crate database, which is
//! loaded once per process on first use.
//!
//! Two producers feed one resolver:
//!
//! ```text
//! UsFederal ─────┐
//!                ├─ normalize (noon) ─ keep Wednesdays ─ sort ─> Vec<Holiday>
//! FixedHolidays ─┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use wedlunch_holidays::{FixedHolidays, HolidaySource, UsFederal, resolve_wednesday_holidays};
//!
//! let federal = UsFederal;
//! let custom = FixedHolidays::year_end();
//! let sources: [&dyn HolidaySource; 2] = [&federal, &custom];
//!
//! let matched = resolve_wednesday_holidays(2025, &sources).unwrap();
//! let names: Vec<&str> = matched.iter().map(|h| h.name()).collect();
//! assert_eq!(names, ["New Year's Day", "Christmas Eve", "New Year's Eve"]);
//! ```

mod error;
mod fixed;
mod holiday;
mod resolve;
mod us_federal;

pub use error::HolidayError;
pub use fixed::{CHRISTMAS_EVE, FixedHoliday, FixedHolidays, NEW_YEARS_EVE};
pub use holiday::{Holiday, HolidaySource};
pub use resolve::resolve_wednesday_holidays;
pub use us_federal::UsFederal;
