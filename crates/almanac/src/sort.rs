//! Chronological event ordering.
//!
//! Events are ordered by timestamp key, then by the date's order suffix as
//! plain string comparison (so an empty suffix comes first). Events without a
//! date always sort after every dated event. The sort is stable: anything
//! still tied keeps its input order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::calendar::CalendarModel;
use crate::date::ParsedDate;
use crate::timestamp::{to_timestamp, TimestampKey};

/// A host event: an optional date, its derived sort key, and an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event<T> {
    date: Option<ParsedDate>,
    sort: Option<TimestampKey>,
    pub data: T,
}

impl<T> Event<T> {
    /// Wrap `data`, computing the sort key from `date` under `calendar`.
    pub fn new(date: Option<ParsedDate>, calendar: &CalendarModel, data: T) -> Self {
        let sort = date.as_ref().map(|d| to_timestamp(d, calendar));
        Self { date, sort, data }
    }

    /// An event whose date could not be parsed.
    pub fn undated(data: T) -> Self {
        Self {
            date: None,
            sort: None,
            data,
        }
    }

    pub fn date(&self) -> Option<&ParsedDate> {
        self.date.as_ref()
    }

    pub fn sort_key(&self) -> Option<TimestampKey> {
        self.sort
    }
}

/// Chronological comparison of two events (undated last).
pub fn compare_events<T>(a: &Event<T>, b: &Event<T>) -> Ordering {
    match (a.sort, b.sort) {
        (Some(ka), Some(kb)) => ka.cmp(&kb).then_with(|| order_of(a).cmp(order_of(b))),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn order_of<T>(event: &Event<T>) -> &str {
    event.date.as_ref().map_or("", ParsedDate::order)
}

/// Return a chronologically sorted copy of `events`. The input is untouched.
pub fn sort_events<T: Clone>(events: &[Event<T>]) -> Vec<Event<T>> {
    let mut sorted = events.to_vec();
    sorted.sort_by(compare_events);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::gregorian;

    #[test]
    fn undated_compares_after_dated() {
        let cal = gregorian();
        let dated = Event::new(ParsedDate::new(9999, 11, 31, "", &cal).ok(), &cal, ());
        let undated = Event::undated(());
        assert_eq!(compare_events(&dated, &undated), Ordering::Less);
        assert_eq!(compare_events(&undated, &dated), Ordering::Greater);
        assert_eq!(compare_events(&undated, &undated), Ordering::Equal);
    }

    #[test]
    fn new_without_date_has_no_key() {
        let cal = gregorian();
        let event = Event::new(None, &cal, "x");
        assert_eq!(event.sort_key(), None);
        assert_eq!(event.date(), None);
    }
}
