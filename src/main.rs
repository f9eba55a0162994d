mod cli;
mod config;
mod convert;
mod generate;
mod holidays_cmd;
mod logging;
mod plan;
mod summary;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Holidays(args) => holidays_cmd::run(args),
    }
}
