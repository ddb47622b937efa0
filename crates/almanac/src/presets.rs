//! Built-in calendar definitions.

use crate::calendar::{CalendarModel, Month};
use crate::config::CalendarConfig;
use crate::leap::{LeapDay, LeapInterval};

/// Names accepted by [`CalendarConfig::preset`].
pub fn names() -> &'static [&'static str] {
    &["gregorian"]
}

pub(crate) fn config(name: &str) -> Option<CalendarConfig> {
    match name.trim().to_lowercase().as_str() {
        "gregorian" => Some(gregorian_config()),
        _ => None,
    }
}

fn gregorian_config() -> CalendarConfig {
    const MONTHS: [(&str, &str, u32); 12] = [
        ("January", "Jan", 31),
        ("February", "Feb", 28),
        ("March", "Mar", 31),
        ("April", "Apr", 30),
        ("May", "May", 31),
        ("June", "Jun", 30),
        ("July", "Jul", 31),
        ("August", "Aug", 31),
        ("September", "Sep", 30),
        ("October", "Oct", 31),
        ("November", "Nov", 30),
        ("December", "Dec", 31),
    ];

    CalendarConfig {
        name: "Gregorian Calendar".to_string(),
        months: MONTHS
            .iter()
            .map(|&(name, abbr, len)| Month::new(name, abbr, len))
            .collect(),
        leap_days: vec![LeapDay::new(
            "Leap Day",
            1,
            vec![
                LeapInterval::every(400),
                LeapInterval::except(100),
                LeapInterval::every(4),
            ],
        )],
        case_sensitive: false,
    }
}

/// The proleptic Gregorian calendar, year 0 included.
pub fn gregorian() -> CalendarModel {
    // The preset is static and known to be valid.
    match CalendarModel::try_from(gregorian_config()) {
        Ok(cal) => cal,
        Err(e) => unreachable!("gregorian preset is invalid: {e}"),
    }
}
