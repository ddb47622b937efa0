//! Timestamp keys -- one integer per day, ordered chronologically.
//!
//! The key of a date is the signed number of days between the first day of
//! year 0 and that date, accumulated as:
//!
//! 1. every day of every year strictly before `date.year` (leap days included),
//! 2. every day of every month strictly before `date.month` in `date.year`,
//! 3. `date.day - 1`.
//!
//! Years below 0 extend the same accumulation downward, so `0-Jan-01` is key 0
//! and the last day of year -1 is key -1. Keys are `i128`, which cannot
//! overflow for any `i64` year and `u32` month length.
//!
//! The order suffix is not encoded; see [`crate::sort`].

use std::fmt;

use serde::Serialize;

use crate::calendar::CalendarModel;
use crate::date::ParsedDate;

/// A day number under one calendar. Comparing keys from different calendars
/// is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TimestampKey(i128);

impl TimestampKey {
    pub fn new(days: i128) -> Self {
        Self(days)
    }

    pub fn days(self) -> i128 {
        self.0
    }
}

impl fmt::Display for TimestampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the timestamp key of `date` under `calendar`.
///
/// `date` must have been validated against the same calendar.
pub fn to_timestamp(date: &ParsedDate, calendar: &CalendarModel) -> TimestampKey {
    let years = calendar.days_before_year(date.year());
    let months = i128::from(calendar.days_before_month(date.month(), date.year()));
    let days = i128::from(date.day()) - 1;
    let key = TimestampKey(years + months + days);
    tracing::trace!(
        year = date.year(),
        month = date.month(),
        day = date.day(),
        key = %key,
        "timestamp computed"
    );
    key
}

/// The date whose key is `key`, with an empty order suffix.
///
/// Returns `None` only when the year would fall outside `i64`.
pub fn date_from_timestamp(key: TimestampKey, calendar: &CalendarModel) -> Option<ParsedDate> {
    let year = year_containing(key.0, calendar)?;
    let mut remaining = key.0 - calendar.days_before_year(year);

    for month in 0..calendar.month_count() {
        let len = i128::from(calendar.days_in_month(month, year)?);
        if remaining < len {
            // 0 <= remaining < len <= u32::MAX
            return ParsedDate::new(year, month, remaining as i64 + 1, "", calendar).ok();
        }
        remaining -= len;
    }
    None
}

/// Largest year whose first day is at or before `days`.
fn year_containing(days: i128, calendar: &CalendarModel) -> Option<i64> {
    // Each year has between `shortest` and `longest` days, which brackets the
    // answer; `days_before_year` is strictly increasing inside the bracket.
    let shortest = i128::from(calendar.nominal_year_length());
    let longest = shortest + calendar.leap_days().len() as i128;
    let (fast, slow) = (days.div_euclid(longest), days.div_euclid(shortest));

    // days_before_year(lo) <= days < days_before_year(hi)
    let mut lo = (fast.min(slow) - 1).max(i128::from(i64::MIN));
    let mut hi = (fast.max(slow) + 1).min(i128::from(i64::MAX) + 1);
    let floor = i64::try_from(lo).ok()?;
    if calendar.days_before_year(floor) > days {
        return None;
    }

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        // lo < mid < hi <= i64::MAX + 1
        if calendar.days_before_year(mid as i64) <= days {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    i64::try_from(lo).ok()
}
