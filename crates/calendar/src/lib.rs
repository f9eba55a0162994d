//! # wedlunch-calendar
//!
//! Pure date arithmetic for the Wednesday Lunch schedule.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"wednesdays()"| B["Vec of NaiveDate"]
//!     B -->|"NormalizedDate::new()"| D["NormalizedDate (noon)"]
//!     C["holiday feed NaiveDate"] -->|"NormalizedDate::new()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Datelike;
//! use wedlunch_calendar::{NormalizedDate, wednesdays};
//!
//! let dates = wednesdays(2025).unwrap();
//! assert_eq!(dates[0].day(), 1); // Jan 1, 2025 is a Wednesday
//!
//! let noon = NormalizedDate::new(dates[0]);
//! assert!(noon.is_wednesday());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Noon-normalized date used as the join key |
//! | `sequence` | Weekly date enumeration within a year |
//! | `error` | Error types |

mod date;
mod error;
mod sequence;

pub use date::NormalizedDate;
pub use error::CalendarError;
pub use sequence::{wednesdays, weekdays_in_year};
