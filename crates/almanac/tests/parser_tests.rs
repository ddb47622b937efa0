//! Tests for date string parsing against the Gregorian preset and custom calendars.

use almanac::{parse_date, presets, CalendarModel, LeapDay, LeapInterval, Month, ParseFailure};

fn date(year: i64, month: usize, day: u32, order: &str) -> (i64, usize, u32, String) {
    (year, month, day, order.to_string())
}

fn parsed(raw: &str, cal: &CalendarModel) -> Option<(i64, usize, u32, String)> {
    parse_date(raw, cal)
        .ok()
        .map(|d| (d.year(), d.month(), d.day(), d.order().to_string()))
}

// ---------------------------------------------------------------------------
// Shapes: year, year-month, year-month-day, year-month-day-order
// ---------------------------------------------------------------------------

#[test]
fn january_in_every_shape() {
    let cal = presets::gregorian();
    let expected = Some(date(0, 0, 1, ""));
    assert_eq!(parsed("0", &cal), expected);
    assert_eq!(parsed("0-01", &cal), expected);
    assert_eq!(parsed("0-01-01", &cal), expected);
    assert_eq!(parsed("0-Jan", &cal), expected);
    assert_eq!(parsed("0-January-01", &cal), expected);
}

#[test]
fn february_in_every_shape() {
    let cal = presets::gregorian();
    let expected = Some(date(0, 1, 1, ""));
    assert_eq!(parsed("0-02", &cal), expected);
    assert_eq!(parsed("0-02-01", &cal), expected);
    assert_eq!(parsed("0-Feb", &cal), expected);
    assert_eq!(parsed("0-February-01", &cal), expected);
}

#[test]
fn day_zero_is_brought_into_range() {
    let cal = presets::gregorian();
    assert_eq!(parsed("0-02-00", &cal), Some(date(0, 1, 1, "")));
}

#[test]
fn negative_day_is_brought_into_range() {
    let cal = presets::gregorian();
    assert_eq!(parsed("0-02--5", &cal), Some(date(0, 1, 1, "")));
    assert_eq!(parsed("0-02--5-note", &cal), Some(date(0, 1, 1, "note")));
}

#[test]
fn day_past_month_end_fails() {
    let cal = presets::gregorian();
    assert_eq!(
        parse_date("1900-Feb-30", &cal),
        Err(ParseFailure::DayOutOfRange {
            day: 30,
            month: 1,
            max: 28
        })
    );
    assert!(parse_date("2023-04-31", &cal).is_err());
    assert!(parse_date("2023-12-32", &cal).is_err());
}

#[test]
fn order_suffix_kept() {
    let cal = presets::gregorian();
    let expected = Some(date(0, 2, 31, "some extra"));
    assert_eq!(parsed("0-03-31-some extra", &cal), expected);
    assert_eq!(parsed("0-Mar-31-some extra", &cal), expected);
    assert_eq!(parsed("0-March-31-some extra", &cal), expected);
}

#[test]
fn multi_segment_order_rejoined_with_hyphens() {
    let cal = presets::gregorian();
    assert_eq!(parsed("0-03-31-a-b", &cal), Some(date(0, 2, 31, "a-b")));
    assert_eq!(parsed("0-03-31-a--b", &cal), Some(date(0, 2, 31, "a--b")));
}

#[test]
fn empty_order_suffix_is_empty_string() {
    let cal = presets::gregorian();
    assert_eq!(parsed("0-03-31-", &cal), Some(date(0, 2, 31, "")));
    assert_eq!(parsed("0-03-31-   ", &cal), Some(date(0, 2, 31, "")));
}

// ---------------------------------------------------------------------------
// Leap years
// ---------------------------------------------------------------------------

#[test]
fn gregorian_leap_years_accept_february_29() {
    let cal = presets::gregorian();
    for year in [1996, 1600, 2000, 2024, 0, -4, -400] {
        assert_eq!(
            parsed(&format!("{year}-February-29"), &cal),
            Some(date(year, 1, 29, "")),
            "{year} should be a leap year"
        );
    }
}

#[test]
fn gregorian_common_years_reject_february_29() {
    let cal = presets::gregorian();
    for year in [1700, 1800, 1900, 2023, -100, -1] {
        assert!(
            parse_date(&format!("{year}-Feb-29"), &cal).is_err(),
            "{year} should not be a leap year"
        );
    }
}

#[test]
fn custom_leap_rule_applies_per_year() {
    let cal = CalendarModel::new(
        "Tiny",
        vec![Month::new("Frost", "Fr", 10), Month::new("Thaw", "Th", 5)],
        vec![LeapDay::new("Thaw Day", 1, vec![LeapInterval::every(3)])],
    )
    .unwrap();
    assert!(parse_date("3-Thaw-6", &cal).is_ok());
    assert!(parse_date("4-Thaw-6", &cal).is_err());
    assert!(parse_date("4-Thaw-5", &cal).is_ok());
}

// ---------------------------------------------------------------------------
// Month tokens
// ---------------------------------------------------------------------------

#[test]
fn month_names_are_case_insensitive_by_default() {
    let cal = presets::gregorian();
    assert_eq!(parsed("5-MARCH-02", &cal), Some(date(5, 2, 2, "")));
    assert_eq!(parsed("5-mar-02", &cal), Some(date(5, 2, 2, "")));
}

#[test]
fn month_number_out_of_range_fails() {
    let cal = presets::gregorian();
    assert_eq!(
        parse_date("5-13-01", &cal),
        Err(ParseFailure::UnknownMonth("13".to_string()))
    );
    assert_eq!(
        parse_date("5-00-01", &cal),
        Err(ParseFailure::UnknownMonth("00".to_string()))
    );
}

#[test]
fn unknown_month_name_fails() {
    let cal = presets::gregorian();
    assert_eq!(
        parse_date("5-Thermidor-01", &cal),
        Err(ParseFailure::UnknownMonth("Thermidor".to_string()))
    );
}

#[test]
fn segments_are_trimmed() {
    let cal = presets::gregorian();
    assert_eq!(
        parsed("  1954 - Jan - 01 - misc  ", &cal),
        Some(date(1954, 0, 1, "misc"))
    );
}

// ---------------------------------------------------------------------------
// Years and malformed input
// ---------------------------------------------------------------------------

#[test]
fn negative_years_parse() {
    let cal = presets::gregorian();
    assert_eq!(parsed("-44-Mar-15", &cal), Some(date(-44, 2, 15, "")));
    assert_eq!(parsed("-1", &cal), Some(date(-1, 0, 1, "")));
}

#[test]
fn malformed_inputs_fail_without_panicking() {
    let cal = presets::gregorian();
    assert_eq!(parse_date("", &cal), Err(ParseFailure::Empty));
    assert_eq!(parse_date("   ", &cal), Err(ParseFailure::Empty));
    assert_eq!(
        parse_date("abc", &cal),
        Err(ParseFailure::InvalidYear("abc".to_string()))
    );
    assert_eq!(
        parse_date("-", &cal),
        Err(ParseFailure::InvalidYear("-".to_string()))
    );
    assert_eq!(
        parse_date("--5", &cal),
        Err(ParseFailure::InvalidYear("-".to_string()))
    );
    assert_eq!(
        parse_date("2000-Jan-1st", &cal),
        Err(ParseFailure::InvalidDay("1st".to_string()))
    );
    assert!(parse_date("99999999999999999999", &cal).is_err());
    assert!(parse_date("2000--", &cal).is_err());
    assert!(parse_date("2000-Jan-99999999999999999999", &cal).is_err());
}

#[test]
fn case_sensitive_calendar_rejects_wrong_case() {
    let cal = almanac::CalendarConfig::from_json_str(
        r#"{
            "name": "Strict",
            "case_sensitive": true,
            "months": [
                {"name": "Alpha", "abbreviation": "Al", "length": 20},
                {"name": "Beta", "abbreviation": "Be", "length": 20}
            ]
        }"#,
    )
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(parsed("1-Beta-3", &cal), Some(date(1, 1, 3, "")));
    assert_eq!(parsed("1-Be-3", &cal), Some(date(1, 1, 3, "")));
    assert!(parse_date("1-beta-3", &cal).is_err());
    assert!(parse_date("1-BE-3", &cal).is_err());
}
