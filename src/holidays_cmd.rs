//! Holidays command: print the Wednesday holiday summary only.

use anyhow::Result;
use tracing::info_span;

use crate::cli::HolidaysArgs;
use crate::config;
use crate::convert;
use crate::plan::plan_year;
use crate::summary;

/// Print the holidays that fall on a Wednesday for the configured year.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let _cmd = info_span!("holidays").entered();
    print!("{}", report(args)?);
    Ok(())
}

fn report(args: HolidaysArgs) -> Result<String> {
    let mut config = config::load(args.config.as_deref())?;
    if let Some(year) = args.year {
        config.year = year;
    }
    let custom = convert::build_custom_holidays(&config.custom_holidays)?;
    let plan = plan_year(config.year, &custom)?;
    Ok(summary::holiday_summary(plan.year, &plan.holidays))
}
