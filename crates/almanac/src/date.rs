//! Validated calendar-relative dates.

use serde::Serialize;

use crate::calendar::CalendarModel;
use crate::error::ParseFailure;

/// A date that is known to exist in the calendar it was built against.
///
/// `month` is a zero-based index and `day` is 1-based. `order` is free text
/// used to order events that share a day; it is empty when absent.
///
/// The derived ordering (year, month, day, order) is chronological under any
/// calendar, since month indices and days only ever grow within a year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ParsedDate {
    year: i64,
    month: usize,
    day: u32,
    order: String,
}

/// How [`ParsedDate::format`] renders the month segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthStyle {
    /// 1-based, zero-padded to two digits (`02`).
    #[default]
    Number,
    /// Full month name (`February`).
    Name,
    /// Abbreviation, or the full name when the month has none (`Feb`).
    Abbreviation,
}

impl ParsedDate {
    /// Build a date, checking it against `calendar`.
    ///
    /// No normalization happens here: a `day` below 1 is rejected just like
    /// one past the end of the month.
    ///
    /// # Errors
    /// Returns [`ParseFailure::UnknownMonth`] if `month` is not a valid index and
    /// [`ParseFailure::DayOutOfRange`] if `day` does not exist in that month and year.
    pub fn new(
        year: i64,
        month: usize,
        day: i64,
        order: impl Into<String>,
        calendar: &CalendarModel,
    ) -> Result<Self, ParseFailure> {
        let max = calendar
            .days_in_month(month, year)
            .ok_or_else(|| ParseFailure::UnknownMonth(month.to_string()))?;
        if day < 1 || day > i64::from(max) {
            return Err(ParseFailure::DayOutOfRange { day, month, max });
        }
        Ok(Self {
            year,
            month,
            // 1 <= day <= max, and max is a u32.
            day: day as u32,
            order: order.into(),
        })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> usize {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn order(&self) -> &str {
        &self.order
    }

    /// Render the date in the `year-month-day[-order]` shape the parser accepts.
    pub fn format(&self, calendar: &CalendarModel, style: MonthStyle) -> String {
        let month = match (style, calendar.month(self.month)) {
            (MonthStyle::Name, Some(m)) => m.name.clone(),
            (MonthStyle::Abbreviation, Some(m)) if !m.abbreviation.is_empty() => {
                m.abbreviation.clone()
            }
            (MonthStyle::Abbreviation, Some(m)) => m.name.clone(),
            _ => format!("{:02}", self.month + 1),
        };

        let mut out = format!("{}-{}-{:02}", self.year, month, self.day);
        if !self.order.is_empty() {
            out.push('-');
            out.push_str(&self.order);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::gregorian;

    #[test]
    fn new_rejects_day_zero_without_normalizing() {
        let cal = gregorian();
        assert_eq!(
            ParsedDate::new(0, 1, 0, "", &cal),
            Err(ParseFailure::DayOutOfRange {
                day: 0,
                month: 1,
                max: 29
            })
        );
    }

    #[test]
    fn new_rejects_month_index_past_end() {
        let cal = gregorian();
        assert_eq!(
            ParsedDate::new(0, 12, 1, "", &cal),
            Err(ParseFailure::UnknownMonth("12".to_string()))
        );
    }

    #[test]
    fn format_styles() {
        let cal = gregorian();
        let date = ParsedDate::new(-44, 2, 15, "ides", &cal).unwrap();
        assert_eq!(date.format(&cal, MonthStyle::Number), "-44-03-15-ides");
        assert_eq!(date.format(&cal, MonthStyle::Name), "-44-March-15-ides");
        assert_eq!(date.format(&cal, MonthStyle::Abbreviation), "-44-Mar-15-ides");
    }

    #[test]
    fn derived_order_is_chronological() {
        let cal = gregorian();
        let a = ParsedDate::new(1954, 0, 1, "", &cal).unwrap();
        let b = ParsedDate::new(1954, 0, 1, "misc", &cal).unwrap();
        let c = ParsedDate::new(1954, 1, 1, "", &cal).unwrap();
        let d = ParsedDate::new(-1, 11, 31, "", &cal).unwrap();
        assert!(d < a && a < b && b < c);
    }
}
