//! Date string parsing -- `year[-month[-day[-order...]]]` into a [`ParsedDate`].
//!
//! Accepted shapes, with `M` a month name, abbreviation or 1-based number:
//!
//! | Input                  | Result                          |
//! |------------------------|---------------------------------|
//! | `1954`                 | year 1954, month 0, day 1       |
//! | `1954-Feb`             | day 1 of February               |
//! | `1954-02-14`           | February 14                     |
//! | `1954-02-14-a-b`       | February 14, order `"a-b"`      |
//! | `-44-Mar-15`           | year -44                        |
//!
//! # Trimming and case
//!
//! - The whole input is trimmed before splitting on `-`.
//! - Year, month and day segments are trimmed individually.
//! - The order suffix is rejoined with `-` and then trimmed as a whole, so
//!   hyphens inside it survive but surrounding whitespace does not.
//! - Month names match case-insensitively unless the calendar opts out (see
//!   [`CalendarModel::resolve_month`]).
//!
//! # Signs
//!
//! A leading `-` on the input makes the year negative. An empty day segment
//! followed by a number is a negative day (`0-02--3`). Days below 1 are
//! normalized up to 1 *before* range validation; days past the end of the
//! month are a failure.

use std::fmt;

use crate::calendar::CalendarModel;
use crate::date::ParsedDate;
use crate::error::ParseFailure;

/// Where a date string came from. Used only in log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: String,
    pub line: Option<usize>,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => f.write_str(&self.path),
        }
    }
}

/// Parse `raw` against `calendar`.
///
/// # Errors
/// Returns the [`ParseFailure`] describing why no date could be produced. The
/// function never panics on any input.
pub fn parse_date(raw: &str, calendar: &CalendarModel) -> Result<ParsedDate, ParseFailure> {
    parse_date_from(raw, calendar, None)
}

/// Same as [`parse_date`], reporting `source` in the debug log on failure.
///
/// # Errors
/// See [`parse_date`].
pub fn parse_date_from(
    raw: &str,
    calendar: &CalendarModel,
    source: Option<&SourceLocation>,
) -> Result<ParsedDate, ParseFailure> {
    let result = parse_segments(raw, calendar);
    if let Err(reason) = &result {
        match source {
            Some(src) => tracing::debug!(
                input = raw,
                source = %src,
                calendar = calendar.name(),
                %reason,
                "date rejected"
            ),
            None => tracing::debug!(
                input = raw,
                calendar = calendar.name(),
                %reason,
                "date rejected"
            ),
        }
    }
    result
}

fn parse_segments(raw: &str, calendar: &CalendarModel) -> Result<ParsedDate, ParseFailure> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let (negative_year, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let mut segments = body.split('-');

    let year = parse_year(segments.next().unwrap_or_default(), negative_year)?;

    let Some(month_token) = segments.next() else {
        return ParsedDate::new(year, 0, 1, "", calendar);
    };
    let month = calendar
        .resolve_month(month_token)
        .ok_or_else(|| ParseFailure::UnknownMonth(month_token.trim().to_string()))?;

    let day = match segments.next() {
        None => 1,
        Some(token) if token.trim().is_empty() => {
            // "--N": an empty segment followed by a number is a negative day.
            let magnitude = segments.next().unwrap_or_default();
            parse_int(magnitude, true)
                .ok_or_else(|| ParseFailure::InvalidDay(format!("-{}", magnitude.trim())))?
        }
        Some(token) => parse_int(token, false)
            .ok_or_else(|| ParseFailure::InvalidDay(token.trim().to_string()))?,
    };

    let order = segments.collect::<Vec<_>>().join("-");

    ParsedDate::new(year, month, normalize_day(day), order.trim(), calendar)
}

fn parse_year(token: &str, negative: bool) -> Result<i64, ParseFailure> {
    parse_int(token, negative).ok_or_else(|| {
        let shown = if negative {
            format!("-{}", token.trim())
        } else {
            token.trim().to_string()
        };
        ParseFailure::InvalidYear(shown)
    })
}

fn parse_int(token: &str, negative: bool) -> Option<i64> {
    let token = token.trim();
    // A sign was already consumed by the caller for negative values.
    if token.is_empty() || (negative && token.starts_with(['-', '+'])) {
        return None;
    }
    if negative {
        format!("-{token}").parse().ok()
    } else {
        token.parse().ok()
    }
}

/// Days below 1 mean "the first day of the month".
fn normalize_day(day: i64) -> i64 {
    day.max(1)
}
