use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wednesday Lunch schedule page generator.
#[derive(Parser)]
#[command(
    name = "wedlunch",
    version,
    about = "Generate the Wednesday Lunch schedule page for a year"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the HTML schedule and print the holiday summary.
    Generate(GenerateArgs),
    /// Print the Wednesday holidays for a year without writing anything.
    Holidays(HolidaysArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file. Built-in defaults apply without one.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the schedule year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Override the output HTML path (default: <output_dir>/wednesday_lunch_<year>.html).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the schedule year from config.
    #[arg(short, long)]
    pub year: Option<i32>,
}
