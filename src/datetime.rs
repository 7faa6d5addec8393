//! NNTP date stamp parsing and formatting
//!
//! The DATE command answers with a 14-digit `yyyymmddhhmmss` stamp, and
//! NEWGROUPS/NEWNEWS take a `yyyymmdd hhmmss` argument pair. Commands always
//! emit four-digit years; two-digit years in server-produced dates are
//! accepted on parse using the RFC 3977 pivot (years below 70 are 20yy,
//! 70 through 99 are 19yy).

use crate::error::{DataError, NntpError, Result};
use chrono::{NaiveDate, NaiveDateTime};

fn bad_date(s: &str) -> NntpError {
    NntpError::Data(DataError::BadDate(s.to_string()))
}

/// Parse the DATE reply argument: exactly 14 ASCII digits, `yyyymmddhhmmss`.
pub fn parse_date_stamp(stamp: &str) -> Result<NaiveDateTime> {
    if stamp.len() != 14 || !stamp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_date(stamp));
    }

    NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S").map_err(|_| bad_date(stamp))
}

/// Format a date/time as the 14-digit NNTP stamp.
pub fn format_date_stamp(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y%m%d%H%M%S").to_string()
}

/// Format the `<yyyymmdd> <hhmmss>` argument pair for NEWGROUPS and NEWNEWS.
///
/// The year is always four digits; the legacy two-digit form is accepted on
/// input elsewhere but never emitted.
pub fn format_date_args(datetime: &NaiveDateTime) -> (String, String) {
    (
        datetime.format("%Y%m%d").to_string(),
        datetime.format("%H%M%S").to_string(),
    )
}

/// Expand a two-digit year per the RFC 3977 pivot: <70 maps to 20yy,
/// 70 through 99 map to 19yy.
pub fn expand_two_digit_year(yy: u32) -> i32 {
    if yy < 70 {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Parse a server-produced `<date> <time>` pair, accepting both the
/// four-digit-year (`yyyymmdd`) and legacy two-digit-year (`yymmdd`) forms.
pub fn parse_date_args(date: &str, time: &str) -> Result<NaiveDateTime> {
    let raw = format!("{date} {time}");
    if !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_date(&raw));
    }

    let (year, rest) = match date.len() {
        8 => (date[..4].parse::<i32>().map_err(|_| bad_date(&raw))?, &date[4..]),
        6 => {
            let yy = date[..2].parse::<u32>().map_err(|_| bad_date(&raw))?;
            (expand_two_digit_year(yy), &date[2..])
        }
        _ => return Err(bad_date(&raw)),
    };

    let month: u32 = rest[..2].parse().map_err(|_| bad_date(&raw))?;
    let day: u32 = rest[2..].parse().map_err(|_| bad_date(&raw))?;

    if time.len() != 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_date(&raw));
    }
    let hour: u32 = time[..2].parse().map_err(|_| bad_date(&raw))?;
    let minute: u32 = time[2..4].parse().map_err(|_| bad_date(&raw))?;
    let second: u32 = time[4..].parse().map_err(|_| bad_date(&raw))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| bad_date(&raw))
}
