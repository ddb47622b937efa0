//! Leap rules -- which months gain extra days in which years.
//!
//! A calendar carries zero or more [`LeapDay`]s. Each one adds a single day to
//! one month in every year its interval list matches. Intervals are evaluated
//! from the largest down; the first interval that divides the (offset) year
//! decides, and an exclusive interval means "not this year". The Gregorian
//! rule is `[400, !100, 4]`.
//!
//! Leap patterns repeat every `lcm(intervals)` years, so each compiled leap day
//! keeps a prefix table over one cycle. Counting leap years before any year,
//! negative ones included, is then a division plus a table lookup.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Longest leap cycle (in years) a calendar may declare.
pub const MAX_LEAP_CYCLE: u64 = 1 << 20;

/// One condition in a leap day's interval list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeapInterval {
    /// Period in years. Must be non-zero.
    pub interval: u32,
    /// When the year matches this interval, it is *not* a leap year.
    #[serde(default)]
    pub exclusive: bool,
    /// Match against the raw year instead of `year - offset`.
    #[serde(default)]
    pub ignore_offset: bool,
}

impl LeapInterval {
    /// A year divisible by `interval` is a leap year.
    pub fn every(interval: u32) -> Self {
        Self {
            interval,
            exclusive: false,
            ignore_offset: false,
        }
    }

    /// A year divisible by `interval` is not a leap year.
    pub fn except(interval: u32) -> Self {
        Self {
            interval,
            exclusive: true,
            ignore_offset: false,
        }
    }

    fn matches(&self, year: i64, offset: i64) -> bool {
        let shift = if self.ignore_offset { 0 } else { offset };
        (i128::from(year) - i128::from(shift)).rem_euclid(i128::from(self.interval)) == 0
    }
}

/// An extra day inserted into one month on the years its intervals select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeapDay {
    #[serde(default)]
    pub name: String,
    /// Zero-based index of the month that grows by one day.
    pub month: usize,
    /// Year shift applied before the divisibility test.
    #[serde(default)]
    pub offset: i64,
    pub interval: Vec<LeapInterval>,
}

impl LeapDay {
    pub fn new(name: impl Into<String>, month: usize, interval: Vec<LeapInterval>) -> Self {
        Self {
            name: name.into(),
            month,
            offset: 0,
            interval,
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Whether this leap day occurs in `year`, evaluated directly from the
    /// interval list. Among equal intervals the one listed first decides.
    pub fn occurs_in(&self, year: i64) -> bool {
        self.interval
            .iter()
            .filter(|i| i.matches(year, self.offset))
            .min_by_key(|i| Reverse(i.interval))
            .is_some_and(|i| !i.exclusive)
    }
}

fn first_match_is_leap(sorted: &[LeapInterval], year: i64, offset: i64) -> bool {
    sorted
        .iter()
        .find(|i| i.matches(year, offset))
        .is_some_and(|i| !i.exclusive)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A validated leap day with its per-cycle prefix table.
#[derive(Debug, Clone)]
struct CompiledLeapDay {
    month: usize,
    offset: i64,
    intervals: Vec<LeapInterval>,
    cycle: u64,
    /// `prefix[r]` = leap years in `[0, r)` for `r` in `0..=cycle`.
    prefix: Vec<u32>,
}

impl CompiledLeapDay {
    fn compile(index: usize, day: &LeapDay, months: usize) -> Result<Self> {
        if day.month >= months {
            return Err(CalendarError::LeapMonthOutOfRange {
                leap_day: index,
                month: day.month,
                months,
            });
        }
        if day.interval.is_empty() {
            return Err(CalendarError::EmptyLeapIntervals { leap_day: index });
        }

        let mut intervals = day.interval.clone();
        intervals.sort_by(|a, b| b.interval.cmp(&a.interval));

        let mut cycle: u64 = 1;
        for i in &intervals {
            if i.interval == 0 {
                return Err(CalendarError::ZeroLeapInterval { leap_day: index });
            }
            let n = u64::from(i.interval);
            let lcm = (cycle / gcd(cycle, n)).saturating_mul(n);
            if lcm > MAX_LEAP_CYCLE {
                return Err(CalendarError::LeapCycleTooLong {
                    leap_day: index,
                    cycle: lcm,
                });
            }
            cycle = lcm;
        }

        // cycle <= MAX_LEAP_CYCLE, so every index and count fits.
        let mut prefix = Vec::with_capacity(cycle as usize + 1);
        let mut running = 0u32;
        prefix.push(running);
        for year in 0..cycle as i64 {
            if first_match_is_leap(&intervals, year, day.offset) {
                running += 1;
            }
            prefix.push(running);
        }

        Ok(Self {
            month: day.month,
            offset: day.offset,
            intervals,
            cycle,
            prefix,
        })
    }

    fn occurs_in(&self, year: i64) -> bool {
        first_match_is_leap(&self.intervals, year, self.offset)
    }

    /// Signed count of occurrences in years `[0, year)`; negative for
    /// negative years (minus the count in `[year, 0)`).
    fn count_before(&self, year: i64) -> i128 {
        let year = i128::from(year);
        let cycle = i128::from(self.cycle);
        let per_cycle = i128::from(self.prefix[self.prefix.len() - 1]);
        let rem = year.rem_euclid(cycle) as usize;
        year.div_euclid(cycle) * per_cycle + i128::from(self.prefix[rem])
    }
}

/// The compiled leap policy of a calendar.
#[derive(Debug, Clone)]
pub(crate) struct LeapRule {
    days: Vec<CompiledLeapDay>,
    /// Indices into `days`, grouped by target month.
    by_month: Vec<Vec<usize>>,
}

impl LeapRule {
    pub(crate) fn compile(leap_days: &[LeapDay], months: usize) -> Result<Self> {
        let days = leap_days
            .iter()
            .enumerate()
            .map(|(i, d)| CompiledLeapDay::compile(i, d, months))
            .collect::<Result<Vec<_>>>()?;

        let mut by_month = vec![Vec::new(); months];
        for (i, d) in days.iter().enumerate() {
            by_month[d.month].push(i);
        }

        Ok(Self { days, by_month })
    }

    /// Extra days `month` gains in `year`.
    pub(crate) fn extra_days(&self, month: usize, year: i64) -> u32 {
        self.by_month.get(month).map_or(0, |idx| {
            idx.iter().filter(|&&i| self.days[i].occurs_in(year)).count() as u32
        })
    }

    /// Extra days inserted into months strictly before `month` in `year`.
    pub(crate) fn extra_days_before_month(&self, month: usize, year: i64) -> u64 {
        self.days
            .iter()
            .filter(|d| d.month < month && d.occurs_in(year))
            .count() as u64
    }

    /// Month index -> extra days for `year`. Months without adjustment are absent.
    pub(crate) fn adjustments(&self, year: i64) -> BTreeMap<usize, u32> {
        let mut out = BTreeMap::new();
        for d in self.days.iter().filter(|d| d.occurs_in(year)) {
            *out.entry(d.month).or_insert(0) += 1;
        }
        out
    }

    /// Signed total of leap days in years `[0, year)`.
    pub(crate) fn leap_days_before(&self, year: i64) -> i128 {
        self.days.iter().map(|d| d.count_before(year)).sum()
    }
}
