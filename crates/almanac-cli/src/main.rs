//! `almanac` CLI -- parse, sort and inspect dates in user-defined calendars.
//!
//! ## Usage
//!
//! ```sh
//! # Parse dates against the Gregorian preset
//! almanac parse 1954-Jan-01-misc 2000-02-29
//!
//! # Parse against a custom calendar definition
//! almanac --calendar harptos.toml parse 1372-Flamerule-15
//!
//! # Sort "<date>\t<label>" lines, undated lines last
//! almanac sort -i timeline.tsv -o sorted.tsv
//!
//! # Show the date for a timestamp key
//! almanac date 730544
//!
//! # List months
//! almanac --calendar harptos.toml months
//! ```

mod calendar_source;
mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let calendar = calendar_source::load(cli.calendar.as_deref(), &cli.preset)?;
    match cli.command {
        Command::Parse(args) => commands::parse(&calendar, args),
        Command::Sort(args) => commands::sort(&calendar, args),
        Command::Date(args) => commands::date(&calendar, args),
        Command::Months => commands::months(&calendar),
    }
}
