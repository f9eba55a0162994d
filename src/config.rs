use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level wedlunch configuration. Every field has a default, so an empty
/// file (or no file) reproduces the stock schedule.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LunchConfig {
    /// Schedule year.
    #[serde(default = "default_year")]
    pub year: i32,

    /// Directory receiving `wednesday_lunch_<year>.html`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Speaker contact shown in the page header.
    #[serde(default)]
    pub contact: ContactToml,

    /// Table cell styling.
    #[serde(default)]
    pub style: StyleToml,

    /// Fixed month/day holidays added to the federal calendar.
    #[serde(default = "default_custom_holidays")]
    pub custom_holidays: Vec<CustomHolidayToml>,
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            output_dir: default_output_dir(),
            contact: ContactToml::default(),
            style: StyleToml::default(),
            custom_holidays: default_custom_holidays(),
        }
    }
}

fn default_year() -> i32 {
    2025
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("lunch_talk_schedules")
}
fn default_custom_holidays() -> Vec<CustomHolidayToml> {
    vec![
        CustomHolidayToml {
            month: 12,
            day: 24,
            name: "Christmas Eve".to_string(),
        },
        CustomHolidayToml {
            month: 12,
            day: 31,
            name: "New Year's Eve".to_string(),
        },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactToml {
    #[serde(default = "default_contact_name")]
    pub name: String,
    #[serde(default = "default_contact_username")]
    pub username: String,
}

impl Default for ContactToml {
    fn default() -> Self {
        Self {
            name: default_contact_name(),
            username: default_contact_username(),
        }
    }
}

fn default_contact_name() -> String {
    "Dillon Dong".to_string()
}
fn default_contact_username() -> String {
    "ddong".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleToml {
    #[serde(default = "default_date_column_width")]
    pub date_column_width: String,
    #[serde(default = "default_content_column_width")]
    pub content_column_width: String,
    #[serde(default = "default_cell_padding")]
    pub cell_padding: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default = "default_header_bg_color")]
    pub header_bg_color: String,
    #[serde(default = "default_border_style")]
    pub border_style: String,
}

impl Default for StyleToml {
    fn default() -> Self {
        Self {
            date_column_width: default_date_column_width(),
            content_column_width: default_content_column_width(),
            cell_padding: default_cell_padding(),
            border_color: default_border_color(),
            header_bg_color: default_header_bg_color(),
            border_style: default_border_style(),
        }
    }
}

fn default_date_column_width() -> String {
    "25%".to_string()
}
fn default_content_column_width() -> String {
    "75%".to_string()
}
fn default_cell_padding() -> String {
    "15px".to_string()
}
fn default_border_color() -> String {
    "#E0E0E0".to_string()
}
fn default_header_bg_color() -> String {
    "#B8C5D9".to_string()
}
fn default_border_style() -> String {
    "1px solid".to_string()
}

/// One `[[custom_holidays]]` entry.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomHolidayToml {
    pub month: u32,
    pub day: u32,
    pub name: String,
}

/// Loads the configuration file, or the defaults when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<LunchConfig> {
    let Some(path) = path else {
        return Ok(LunchConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
