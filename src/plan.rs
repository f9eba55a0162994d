//! One year's resolved inputs, computed once and shared by every output.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use wedlunch_calendar::wednesdays;
use wedlunch_holidays::{FixedHolidays, Holiday, UsFederal, resolve_wednesday_holidays};

/// Wednesdays of a year and the holidays that fall on them.
#[derive(Debug)]
pub struct YearPlan {
    pub year: i32,
    pub wednesdays: Vec<NaiveDate>,
    pub holidays: Vec<Holiday>,
}

/// Enumerates Wednesdays and resolves holidays from the federal calendar
/// plus `custom`.
pub fn plan_year(year: i32, custom: &FixedHolidays) -> Result<YearPlan> {
    let wednesdays =
        wednesdays(year).with_context(|| format!("failed to enumerate Wednesdays of {year}"))?;
    let federal = UsFederal;
    let holidays = resolve_wednesday_holidays(year, &[&federal, custom])
        .with_context(|| format!("failed to resolve holidays for {year}"))?;
    info!(
        year,
        n_wednesdays = wednesdays.len(),
        n_holidays = holidays.len(),
        "year planned"
    );
    Ok(YearPlan {
        year,
        wednesdays,
        holidays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_2025() {
        let plan = plan_year(2025, &FixedHolidays::year_end()).unwrap();
        assert_eq!(plan.year, 2025);
        assert_eq!(plan.wednesdays.len(), 53);
        assert_eq!(plan.holidays.len(), 3);
    }

    #[test]
    fn plan_unsupported_year() {
        let err = plan_year(1900, &FixedHolidays::year_end()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to resolve holidays for 1900"), "{msg}");
        assert!(msg.contains("not available for 1900"), "{msg}");
    }
}
