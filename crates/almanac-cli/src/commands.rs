//! Subcommand implementations.

use std::io::{self, Read};
use std::path::Path;

use almanac::{
    date_from_timestamp, parse_date_from, sort_events, to_timestamp, CalendarModel, Event,
    ParsedDate, SourceLocation, TimestampKey,
};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{DateArgs, ParseArgs, SortArgs};

// ---------------------------------------------------------------------------
// Output DTOs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(untagged)]
enum ParseOutput<'a> {
    Parsed {
        input: &'a str,
        year: i64,
        month: usize,
        month_name: &'a str,
        day: u32,
        order: &'a str,
        timestamp: TimestampKey,
    },
    Failed {
        input: &'a str,
        error: String,
    },
}

impl<'a> ParseOutput<'a> {
    fn parsed(input: &'a str, date: &'a ParsedDate, calendar: &'a CalendarModel) -> Self {
        ParseOutput::Parsed {
            input,
            year: date.year(),
            month: date.month(),
            month_name: calendar.month(date.month()).map_or("", |m| m.name.as_str()),
            day: date.day(),
            order: date.order(),
            timestamp: to_timestamp(date, calendar),
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// `almanac parse`: one JSON object per input, in input order.
pub fn parse(calendar: &CalendarModel, args: ParseArgs) -> Result<()> {
    let source = SourceLocation::new("<argv>");
    let mut failed = 0usize;
    let mut out = String::new();

    for (i, raw) in args.dates.iter().map(String::as_str).enumerate() {
        let location = source.clone().with_line(i + 1);
        let result = parse_date_from(raw, calendar, Some(&location));
        let line = match &result {
            Ok(date) => serde_json::to_string(&ParseOutput::parsed(raw, date, calendar))?,
            Err(reason) => {
                failed += 1;
                serde_json::to_string(&ParseOutput::Failed {
                    input: raw,
                    error: reason.to_string(),
                })?
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    print!("{out}");

    if failed > 0 && !args.lenient {
        bail!("{} of {} dates could not be parsed", failed, args.dates.len());
    }
    Ok(())
}

/// `almanac sort`: order `<date>[TAB<label>]` lines; undated lines go last.
pub fn sort(calendar: &CalendarModel, args: SortArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let source = args
        .input
        .as_deref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());

    let events: Vec<Event<&str>> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let raw = line.split_once('\t').map_or(line, |(date, _)| date);
            let location = SourceLocation::new(source.as_str()).with_line(i + 1);
            let date = match parse_date_from(raw, calendar, Some(&location)) {
                Ok(date) => Some(date),
                Err(reason) => {
                    warn!(source = %location, input = raw, %reason, "undated entry, sorting last");
                    None
                }
            };
            Event::new(date, calendar, line)
        })
        .collect();

    let sorted = sort_events(&events);
    info!(entries = sorted.len(), "sorted");

    let mut out = String::new();
    for event in &sorted {
        out.push_str(event.data);
        out.push('\n');
    }
    write_output(args.output.as_deref(), &out)
}

/// `almanac date`: render the date at a timestamp key.
pub fn date(calendar: &CalendarModel, args: DateArgs) -> Result<()> {
    let key = TimestampKey::new(args.key);
    let date = date_from_timestamp(key, calendar)
        .with_context(|| format!("Timestamp {} is outside the representable year range", key))?;
    println!("{}", date.format(calendar, args.month_style.into()));
    Ok(())
}

/// `almanac months`: index, name, abbreviation and nominal length per month.
pub fn months(calendar: &CalendarModel) -> Result<()> {
    let mut out = String::new();
    for (i, m) in calendar.months().iter().enumerate() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            i + 1,
            m.name,
            m.abbreviation,
            m.length
        ));
    }
    for leap in calendar.leap_days() {
        let month = calendar
            .month(leap.month)
            .map_or("?", |m| m.name.as_str());
        let rule: Vec<String> = leap
            .interval
            .iter()
            .map(|i| {
                if i.exclusive {
                    format!("!{}", i.interval)
                } else {
                    i.interval.to_string()
                }
            })
            .collect();
        out.push_str(&format!(
            "leap\t{}\t{}\t+1 every {} (offset {})\n",
            leap.name,
            month,
            rule.join(","),
            leap.offset
        ));
    }
    print!("{out}");
    Ok(())
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
