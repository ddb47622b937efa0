//! Error types for almanac operations.
//!
//! Two families live here. [`CalendarError`] is a configuration fault raised
//! while building a [`CalendarModel`](crate::CalendarModel); it never occurs at
//! parse time. [`ParseFailure`] is the "no result" outcome of parsing a date
//! string and is expected in normal operation.

use thiserror::Error;

/// Errors raised while constructing or loading a calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar has no months")]
    EmptyMonths,

    #[error("Month {month} has an empty name")]
    EmptyMonthName { month: usize },

    #[error("Month {month} has invalid length {length} (must be > 0)")]
    InvalidMonthLength { month: usize, length: u32 },

    #[error("Leap day {leap_day} targets month {month}, but the calendar has {months} months")]
    LeapMonthOutOfRange {
        leap_day: usize,
        month: usize,
        months: usize,
    },

    #[error("Leap day {leap_day} has no intervals")]
    EmptyLeapIntervals { leap_day: usize },

    #[error("Leap day {leap_day} has a zero interval")]
    ZeroLeapInterval { leap_day: usize },

    #[error("Leap day {leap_day} repeats every {cycle} years, which exceeds the supported cycle")]
    LeapCycleTooLong { leap_day: usize, cycle: u64 },

    #[error("Unknown calendar preset: '{0}'")]
    UnknownPreset(String),

    #[error("Invalid calendar configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CalendarError {
    fn from(e: serde_json::Error) -> Self {
        CalendarError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for CalendarError {
    fn from(e: toml::de::Error) -> Self {
        CalendarError::Config(e.to_string())
    }
}

/// Why a date string did not produce a [`ParsedDate`](crate::ParsedDate).
///
/// Every variant means the same thing to callers -- there is no date -- but the
/// reason is kept so hosts can report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The input was empty or only whitespace.
    #[error("empty date string")]
    Empty,

    /// The year segment is missing or not an integer.
    #[error("invalid year: '{0}'")]
    InvalidYear(String),

    /// The day segment is present but not an integer.
    #[error("invalid day: '{0}'")]
    InvalidDay(String),

    /// The month token matches no month name, abbreviation or number.
    #[error("unknown month: '{0}'")]
    UnknownMonth(String),

    /// The (normalized) day does not fit in the month for that year.
    #[error("day {day} is out of range for month {month} (max {max})")]
    DayOutOfRange { day: i64, month: usize, max: u32 },
}

/// Convenience alias used for calendar construction.
pub type Result<T> = std::result::Result<T, CalendarError>;
