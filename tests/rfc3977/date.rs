//! RFC 3977 Section 7.1 - DATE stamp parsing, plus the NEWGROUPS/NEWNEWS
//! date argument rules (four-digit years out, two-digit years tolerated in)

use chrono::{Datelike, NaiveDate, Timelike};
use nntp_client::datetime::{
    expand_two_digit_year, format_date_args, format_date_stamp, parse_date_args, parse_date_stamp,
};
use nntp_client::{DataError, NntpError};

#[test]
fn test_stamp_parse() {
    let dt = parse_date_stamp("19990623135624").unwrap();
    assert_eq!(
        (dt.year(), dt.month(), dt.day()),
        (1999, 6, 23)
    );
    assert_eq!(
        (dt.hour(), dt.minute(), dt.second()),
        (13, 56, 24)
    );
}

#[test]
fn test_stamp_round_trip_across_year_window() {
    // parse(format(d)) == d for the whole two-digit-year window and beyond
    for year in [1970, 1984, 1999, 2000, 2024, 2069, 2100] {
        let dt = NaiveDate::from_ymd_opt(year, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(parse_date_stamp(&format_date_stamp(&dt)).unwrap(), dt);
    }
}

#[test]
fn test_stamp_must_be_exactly_fourteen_digits() {
    // S6: "111 20240101" style truncated stamps are data errors
    for bad in ["20240101", "202401011200", "2024010112000", "202401011200001"] {
        match parse_date_stamp(bad) {
            Err(NntpError::Data(DataError::BadDate(_))) => {}
            other => panic!("expected BadDate for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_stamp_rejects_nonsense_calendar_values() {
    assert!(parse_date_stamp("20241340250000").is_err());
    assert!(parse_date_stamp("20240100120000").is_err()); // day 0
}

#[test]
fn test_emitted_years_are_four_digits() {
    let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(4, 6, 9)
        .unwrap();
    let (date, time) = format_date_args(&dt);
    assert_eq!(date, "20240305");
    assert_eq!(time, "040609");
}

#[test]
fn test_two_digit_year_window() {
    // <70 maps to 20yy, 70-99 to 19yy
    assert_eq!(expand_two_digit_year(0), 2000);
    assert_eq!(expand_two_digit_year(42), 2042);
    assert_eq!(expand_two_digit_year(69), 2069);
    assert_eq!(expand_two_digit_year(70), 1970);
    assert_eq!(expand_two_digit_year(85), 1985);
    assert_eq!(expand_two_digit_year(99), 1999);
}

#[test]
fn test_parse_date_args_accepts_both_forms() {
    let four = parse_date_args("19990623", "135624").unwrap();
    let two = parse_date_args("990623", "135624").unwrap();
    assert_eq!(four, two);

    let modern = parse_date_args("240101", "000000").unwrap();
    assert_eq!(modern.year(), 2024);
}
