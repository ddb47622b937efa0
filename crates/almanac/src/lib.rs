//! # almanac
//!
//! Date parsing and chronological sorting for arbitrary, user-defined calendars.
//!
//! A [`CalendarModel`] describes the months, their lengths and the leap rules
//! of one calendar. Against it, [`parse_date`] turns loosely structured strings
//! like `"1954-Jan-01-misc"` into a validated [`ParsedDate`], [`to_timestamp`]
//! turns a date into a day-granular [`TimestampKey`], and [`sort_events`]
//! orders a batch of events by key and order suffix.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::{parse_date, presets, to_timestamp};
//!
//! let cal = presets::gregorian();
//! let date = parse_date("2000-February-29", &cal).unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (2000, 1, 29));
//!
//! assert!(parse_date("1900-Feb-29", &cal).is_err());
//!
//! let earlier = parse_date("0-Feb-01-02", &cal).unwrap();
//! assert!(to_timestamp(&earlier, &cal) < to_timestamp(&date, &cal));
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] -- `CalendarModel` and `Month`
//! - [`leap`] -- leap day rules
//! - [`config`] -- JSON/TOML calendar configuration
//! - [`presets`] -- built-in calendars
//! - [`date`] -- `ParsedDate` and formatting
//! - [`parser`] -- string → `ParsedDate`
//! - [`timestamp`] -- `ParsedDate` ↔ `TimestampKey`
//! - [`sort`] -- event ordering
//! - [`error`] -- error types

pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod leap;
pub mod parser;
pub mod presets;
pub mod sort;
pub mod timestamp;

pub use calendar::{CalendarModel, Month};
pub use config::CalendarConfig;
pub use date::{MonthStyle, ParsedDate};
pub use error::{CalendarError, ParseFailure};
pub use leap::{LeapDay, LeapInterval};
pub use parser::{parse_date, parse_date_from, SourceLocation};
pub use sort::{compare_events, sort_events, Event};
pub use timestamp::{date_from_timestamp, to_timestamp, TimestampKey};
