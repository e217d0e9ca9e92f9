//! Gregorian calendar date conversions built on [`chrono::NaiveDate`].
//!
//! Every period type reaches the calendar through these functions, so a
//! failure in the underlying date library always surfaces as a
//! [`KalendarError`] carrying the rejected input.

use chrono::{DateTime, Datelike, NaiveDate, Weekday};

use crate::error::KalendarError;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Years outside chrono's supported range report `false`.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_yo_opt(year, 366).is_some()
}

/// Returns the 1-based day within the year (1..=366).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Builds a date, failing only when `year` is outside chrono's range.
pub(crate) fn from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, KalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(KalendarError::YearOutOfRange {
        year: i64::from(year),
    })
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`KalendarError::InvalidIsoDate`] with chrono's parse error.
pub fn from_iso_format(s: &str) -> Result<NaiveDate, KalendarError> {
    Ok(s.trim().parse::<NaiveDate>()?)
}

/// Builds a date from an ISO year, week number and weekday (1 = Monday, 7 = Sunday).
///
/// # Errors
///
/// Returns [`KalendarError::InvalidIsoCalendar`] if the weekday is outside
/// 1..=7 or the week does not exist in the ISO year.
pub fn from_iso_calendar(year: i32, week: u32, weekday: u32) -> Result<NaiveDate, KalendarError> {
    let err = KalendarError::InvalidIsoCalendar {
        year,
        week,
        weekday,
    };
    let wd = match weekday {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return Err(err),
    };
    NaiveDate::from_isoywd_opt(year, week, wd).ok_or(err)
}

/// Returns the UTC calendar date of a POSIX timestamp in seconds.
///
/// # Errors
///
/// Returns [`KalendarError::InvalidTimestamp`] if the timestamp is outside
/// chrono's range.
pub fn from_timestamp(timestamp: i64) -> Result<NaiveDate, KalendarError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.date_naive())
        .ok_or(KalendarError::InvalidTimestamp { timestamp })
}

/// Builds a date from a proleptic Gregorian ordinal, where 0001-01-01 is day 1.
///
/// # Errors
///
/// Returns [`KalendarError::InvalidOrdinal`] if the ordinal is outside
/// chrono's range.
pub fn from_ordinal(ordinal: i64) -> Result<NaiveDate, KalendarError> {
    i32::try_from(ordinal)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(KalendarError::InvalidOrdinal { ordinal })
}

/// Returns the proleptic Gregorian ordinal of `date` (0001-01-01 is day 1).
pub fn to_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}
