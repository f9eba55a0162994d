//! Generate command: write the schedule page and print the holiday summary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wedlunch_render::{build_schedule, render_page};

use crate::cli::GenerateArgs;
use crate::config;
use crate::convert;
use crate::plan::plan_year;
use crate::summary;

/// Run the generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Load config and apply CLI overrides
    let mut config = config::load(args.config.as_deref())?;
    if let Some(year) = args.year {
        config.year = year;
    }
    let output = args
        .output
        .unwrap_or_else(|| convert::default_output_path(&config));

    // 2. Build crate configs
    let page = convert::build_page_config(&config);
    let custom = convert::build_custom_holidays(&config.custom_holidays)?;

    // 3. Resolve once; reused for the page and the summary
    let plan = plan_year(config.year, &custom)?;

    // 4. Render
    let rows = build_schedule(&plan.wednesdays, &plan.holidays);
    let html = render_page(&rows, &page);

    // 5. Write
    write_page(&output, &html)?;
    info!(path = %output.display(), n_rows = rows.len(), "schedule written");

    println!("\nSchedule for {} has been generated!", plan.year);
    print!("{}", summary::holiday_summary(plan.year, &plan.holidays));
    print!("{}", summary::reminders());

    Ok(())
}

/// Writes `html` to `path` as UTF-8, creating the parent directory if needed.
fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write schedule: {}", path.display()))
}
