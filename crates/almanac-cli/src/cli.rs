use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Parse and sort dates in user-defined calendars.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Parse and sort dates in user-defined calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Calendar definition file (.json or .toml). Overrides --preset.
    #[arg(short, long, global = true)]
    pub calendar: Option<PathBuf>,

    /// Built-in calendar to use when no --calendar file is given.
    #[arg(long, global = true, default_value = "gregorian")]
    pub preset: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse date strings and print one JSON object per input.
    Parse(ParseArgs),
    /// Sort `<date>[TAB<label>]` lines chronologically.
    Sort(SortArgs),
    /// Print the date for a timestamp key.
    Date(DateArgs),
    /// List the calendar's months.
    Months,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Date strings, e.g. "1954-Jan-01-misc".
    #[arg(required = true, allow_hyphen_values = true)]
    pub dates: Vec<String>,

    /// Exit successfully even when some dates fail to parse.
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for the `sort` subcommand.
#[derive(clap::Args)]
pub struct SortArgs {
    /// Input file (reads from stdin if omitted).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (writes to stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Timestamp key (days since the first day of year 0).
    #[arg(allow_negative_numbers = true)]
    pub key: i128,

    /// How to render the month.
    #[arg(long, value_enum, default_value_t = MonthFormat::Name)]
    pub month_style: MonthFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MonthFormat {
    Number,
    Name,
    Abbreviation,
}

impl From<MonthFormat> for almanac::MonthStyle {
    fn from(f: MonthFormat) -> Self {
        match f {
            MonthFormat::Number => almanac::MonthStyle::Number,
            MonthFormat::Name => almanac::MonthStyle::Name,
            MonthFormat::Abbreviation => almanac::MonthStyle::Abbreviation,
        }
    }
}
