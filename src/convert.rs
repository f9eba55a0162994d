//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::PathBuf;

use anyhow::{Result, bail};

use wedlunch_holidays::{FixedHoliday, FixedHolidays};
use wedlunch_render::{PageConfig, StyleConfig};

use crate::config::*;

/// Converts the `[style]` table into a `StyleConfig`.
pub fn build_style_config(s: &StyleToml) -> StyleConfig {
    StyleConfig {
        date_column_width: s.date_column_width.clone(),
        content_column_width: s.content_column_width.clone(),
        cell_padding: s.cell_padding.clone(),
        border_color: s.border_color.clone(),
        header_bg_color: s.header_bg_color.clone(),
        border_style: s.border_style.clone(),
    }
}

/// Builds the page settings from contact and style sections.
pub fn build_page_config(config: &LunchConfig) -> PageConfig {
    PageConfig {
        contact_name: config.contact.name.clone(),
        contact_username: config.contact.username.clone(),
        style: build_style_config(&config.style),
    }
}

/// Converts `[[custom_holidays]]` into a holiday source.
///
/// Month must be 1..=12 and day 1..=31; whether the day exists in a given
/// year is checked when the source is queried.
pub fn build_custom_holidays(entries: &[CustomHolidayToml]) -> Result<FixedHolidays> {
    let mut out = Vec::with_capacity(entries.len());
    for e in entries {
        if !(1..=12).contains(&e.month) {
            bail!("custom holiday {:?}: month must be 1..=12, got {}", e.name, e.month);
        }
        if !(1..=31).contains(&e.day) {
            bail!("custom holiday {:?}: day must be 1..=31, got {}", e.name, e.day);
        }
        if e.name.trim().is_empty() {
            bail!("custom holiday on {:02}-{:02} has an empty name", e.month, e.day);
        }
        out.push(FixedHoliday::new(e.month, e.day, e.name.clone()));
    }
    Ok(FixedHolidays::new(out))
}

/// `<output_dir>/wednesday_lunch_<year>.html`.
pub fn default_output_path(config: &LunchConfig) -> PathBuf {
    config
        .output_dir
        .join(format!("wednesday_lunch_{}.html", config.year))
}
