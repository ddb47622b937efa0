//! Calendar model -- months, leap rules and month-token lookup.
//!
//! A [`CalendarModel`] is built once from configuration and is immutable
//! afterwards. It is `Send + Sync` and can be shared freely between threads.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};
use crate::leap::{LeapDay, LeapRule};

/// One month of a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Month {
    pub name: String,
    /// Short form accepted by the parser. Empty means "no abbreviation".
    #[serde(default)]
    pub abbreviation: String,
    /// Nominal day count, before leap adjustments.
    pub length: u32,
}

impl Month {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, length: u32) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            length,
        }
    }
}

/// An immutable calendar description.
#[derive(Debug, Clone)]
pub struct CalendarModel {
    name: String,
    months: Vec<Month>,
    leap_days: Vec<LeapDay>,
    rule: LeapRule,
    case_sensitive: bool,
    /// Normalized month name / abbreviation -> month index.
    lookup: HashMap<String, usize>,
    /// Nominal days before each month, plus the nominal year length at the end.
    offsets: Vec<u64>,
}

impl CalendarModel {
    /// Build a calendar with case-insensitive month matching.
    ///
    /// # Errors
    /// Returns [`CalendarError`] when the month list is empty, a month has an
    /// empty name or zero length, or a leap day is malformed.
    pub fn new(name: impl Into<String>, months: Vec<Month>, leap_days: Vec<LeapDay>) -> Result<Self> {
        Self::build(name.into(), months, leap_days, false)
    }

    fn build(
        name: String,
        months: Vec<Month>,
        leap_days: Vec<LeapDay>,
        case_sensitive: bool,
    ) -> Result<Self> {
        if months.is_empty() {
            return Err(CalendarError::EmptyMonths);
        }

        let mut offsets = Vec::with_capacity(months.len() + 1);
        let mut total = 0u64;
        for (i, m) in months.iter().enumerate() {
            if m.name.trim().is_empty() {
                return Err(CalendarError::EmptyMonthName { month: i });
            }
            if m.length == 0 {
                return Err(CalendarError::InvalidMonthLength {
                    month: i,
                    length: m.length,
                });
            }
            offsets.push(total);
            total += u64::from(m.length);
        }
        offsets.push(total);

        let rule = LeapRule::compile(&leap_days, months.len())?;

        // Full names take precedence over abbreviations; earlier months win ties.
        let mut lookup = HashMap::new();
        for (i, m) in months.iter().enumerate() {
            lookup
                .entry(normalize(&m.name, case_sensitive))
                .or_insert(i);
        }
        for (i, m) in months.iter().enumerate() {
            if !m.abbreviation.trim().is_empty() {
                lookup
                    .entry(normalize(&m.abbreviation, case_sensitive))
                    .or_insert(i);
            }
        }

        tracing::debug!(
            calendar = %name,
            months = months.len(),
            leap_days = leap_days.len(),
            case_sensitive,
            "calendar built"
        );

        Ok(Self {
            name,
            months,
            leap_days,
            rule,
            case_sensitive,
            lookup,
            offsets,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn month(&self, index: usize) -> Option<&Month> {
        self.months.get(index)
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn leap_days(&self) -> &[LeapDay] {
        &self.leap_days
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Resolve a month token to its zero-based index.
    ///
    /// A token made only of ASCII digits is a 1-based month number and never
    /// falls through to name lookup. Anything else is matched against full
    /// names, then abbreviations, after trimming surrounding whitespace.
    pub fn resolve_month(&self, token: &str) -> Option<usize> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            let number: usize = token.parse().ok()?;
            return (1..=self.months.len())
                .contains(&number)
                .then(|| number - 1);
        }
        self.lookup
            .get(&normalize(token, self.case_sensitive))
            .copied()
    }

    /// Effective length of `month` in `year`, leap days included.
    ///
    /// Returns `None` when `month` is out of range.
    pub fn days_in_month(&self, month: usize, year: i64) -> Option<u32> {
        let m = self.months.get(month)?;
        Some(m.length.saturating_add(self.rule.extra_days(month, year)))
    }

    /// Nominal year length, ignoring leap days.
    pub fn nominal_year_length(&self) -> u64 {
        self.offsets[self.months.len()]
    }

    pub fn days_in_year(&self, year: i64) -> u64 {
        self.nominal_year_length() + self.rule.extra_days_before_month(self.months.len(), year)
    }

    /// Per-month extra days for `year`. Months without an adjustment are absent.
    pub fn leap_adjustments(&self, year: i64) -> BTreeMap<usize, u32> {
        self.rule.adjustments(year)
    }

    /// Days in the months strictly before `month` within `year`.
    pub(crate) fn days_before_month(&self, month: usize, year: i64) -> u64 {
        let month = month.min(self.months.len());
        self.offsets[month] + self.rule.extra_days_before_month(month, year)
    }

    /// Signed day count of the years `[0, year)`; negative below year 0.
    pub(crate) fn days_before_year(&self, year: i64) -> i128 {
        i128::from(year) * i128::from(self.nominal_year_length()) + self.rule.leap_days_before(year)
    }
}

impl TryFrom<CalendarConfig> for CalendarModel {
    type Error = CalendarError;

    fn try_from(config: CalendarConfig) -> Result<Self> {
        Self::build(
            config.name,
            config.months,
            config.leap_days,
            config.case_sensitive,
        )
    }
}

fn normalize(token: &str, case_sensitive: bool) -> String {
    let token = token.trim();
    if case_sensitive {
        token.to_string()
    } else {
        token.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leap::LeapInterval;

    fn tiny() -> CalendarModel {
        CalendarModel::new(
            "Tiny",
            vec![
                Month::new("Frost", "Fr", 10),
                Month::new("Thaw", "Th", 5),
                Month::new("Harvest", "", 7),
            ],
            vec![LeapDay::new("Thaw Day", 1, vec![LeapInterval::every(2)])],
        )
        .unwrap()
    }

    #[test]
    fn offsets_accumulate_nominal_lengths() {
        let cal = tiny();
        assert_eq!(cal.nominal_year_length(), 22);
        assert_eq!(cal.days_before_month(0, 1), 0);
        assert_eq!(cal.days_before_month(1, 1), 10);
        assert_eq!(cal.days_before_month(2, 1), 15);
        assert_eq!(cal.days_before_month(2, 2), 16);
    }

    #[test]
    fn days_before_year_is_signed() {
        let cal = tiny();
        assert_eq!(cal.days_before_year(0), 0);
        // Year 0 is a leap year (every 2).
        assert_eq!(cal.days_before_year(1), 23);
        assert_eq!(cal.days_before_year(2), 45);
        // Year -1 is common, year -2 is leap.
        assert_eq!(cal.days_before_year(-1), -22);
        assert_eq!(cal.days_before_year(-2), -45);
    }

    #[test]
    fn empty_abbreviation_is_not_a_token() {
        let cal = tiny();
        assert_eq!(cal.resolve_month(""), None);
        assert_eq!(cal.resolve_month("harvest"), Some(2));
    }
}
