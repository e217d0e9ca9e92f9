//! Ten-day periods, 36 per year.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use tracing::debug;

use crate::date;
use crate::error::KalendarError;
use crate::operand::{self, Operand, Outcome};
use crate::period;

/// A dekad: the first (days 1-10), second (days 11-20) or third (day 21 to
/// month end) ten-day period of a month.
///
/// Dekads are numbered 1..=36 through the year, three per month, so the
/// numbering does not depend on leap years. A `Dekad` is held as the date of
/// its first day (the 1st, 11th or 21st) and compares, orders and hashes
/// exactly like that date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalendar::Dekad;
///
/// let d = Dekad::new(2022, 1).unwrap();
/// assert_eq!(d.to_date(), NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
/// assert_eq!(d - 1, Dekad::new(2021, 36).unwrap());
/// assert_eq!(d.to_string(), "2022 D1");
/// assert_eq!(format!("{d:?}"), "Dekad(2022, 1)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "(i32, u8)", try_from = "(i32, u8)"))]
pub struct Dekad {
    date: NaiveDate,
    dekad: u8,
}

/// Returns the dekad of the year (1..=36) containing `(month, day)`.
fn dekad_of(month: u32, day: u32) -> u8 {
    (((day - 1) / 10).min(2) + (month - 1) * 3 + 1) as u8
}

impl Dekad {
    /// Number of dekads in every year.
    pub const PER_YEAR: u8 = 36;

    /// Creates the `dekad`-th dekad (1..=36) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidDekad`] if `dekad` is outside 1..=36,
    /// and [`KalendarError::YearOutOfRange`] if `year` is outside the
    /// supported calendar range.
    pub fn new(year: i32, dekad: u8) -> Result<Self, KalendarError> {
        if !(1..=Self::PER_YEAR).contains(&dekad) {
            return Err(KalendarError::InvalidDekad { dekad });
        }
        let month = u32::from(dekad - 1) / 3 + 1;
        let day = 10 * (u32::from(dekad - 1) % 3) + 1;
        let date = date::from_ymd(year, month, day)?;
        Ok(Self { date, dekad })
    }

    /// Returns the dekad containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let dekad = dekad_of(date.month(), date.day());
        let first_day = 10 * ((u32::from(dekad) - 1) % 3) + 1;
        Self {
            date: date
                .with_day(first_day)
                .expect("first day of a dekad exists in every month"),
            dekad,
        }
    }

    /// Returns the dekad containing the date part of `datetime`.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self::from_date(datetime.date())
    }

    /// Returns the dekad containing an ISO 8601 date (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidIsoDate`] if `s` is not a valid date.
    #[tracing::instrument(level = "trace")]
    pub fn from_iso_format(s: &str) -> Result<Self, KalendarError> {
        date::from_iso_format(s).map(Self::from_date)
    }

    /// Returns the dekad containing an ISO year/week/weekday date.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidIsoCalendar`] if the triple names no date.
    pub fn from_iso_calendar(year: i32, week: u32, weekday: u32) -> Result<Self, KalendarError> {
        date::from_iso_calendar(year, week, weekday).map(Self::from_date)
    }

    /// Returns the dekad containing the UTC date of a POSIX timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidTimestamp`] if the timestamp is out of range.
    pub fn from_timestamp(timestamp: i64) -> Result<Self, KalendarError> {
        date::from_timestamp(timestamp).map(Self::from_date)
    }

    /// Returns the dekad containing a proleptic Gregorian ordinal (0001-01-01 is day 1).
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidOrdinal`] if the ordinal is out of range.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, KalendarError> {
        date::from_ordinal(ordinal).map(Self::from_date)
    }

    /// Rebuilds a dekad from the `(year, dekad)` pair returned by [`Dekad::to_parts`].
    ///
    /// # Errors
    ///
    /// Same as [`Dekad::new`].
    pub fn from_parts((year, dekad): (i32, u8)) -> Result<Self, KalendarError> {
        Self::new(year, dekad)
    }

    /// Reduces the dekad to its constructor arguments `(year, dekad)`.
    pub fn to_parts(self) -> (i32, u8) {
        (self.year(), self.dekad)
    }

    /// Returns the first day of the dekad.
    pub fn to_date(self) -> NaiveDate {
        self.date
    }

    /// Returns the dekad of the year (1..=36).
    pub fn dekad(self) -> u8 {
        self.dekad
    }

    /// Returns the dekad of the month (1..=3).
    pub fn dekad_monthly(self) -> u8 {
        (1 + (self.date.day() - 1) / 10) as u8
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.date.month()
    }

    /// Returns the day of the month of the first day (1, 11 or 21).
    pub fn day(self) -> u32 {
        self.date.day()
    }

    /// Returns the weekday of the first day.
    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the day of the year of the first day (1..=366).
    pub fn ordinal(self) -> u32 {
        date::day_of_year(self.date)
    }

    /// Returns the proleptic Gregorian ordinal of the first day.
    pub fn to_ordinal(self) -> i64 {
        date::to_ordinal(self.date)
    }

    /// Returns the ISO `(year, week, weekday)` of the first day, weekday 1 = Monday.
    pub fn iso_calendar(self) -> (i32, u32, u32) {
        let week = self.date.iso_week();
        (
            week.year(),
            week.week(),
            self.date.weekday().number_from_monday(),
        )
    }

    /// Returns the first day formatted as `YYYY-MM-DD`.
    pub fn iso_format(self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Moves `n` dekads forward (or backward for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::YearOutOfRange`] if the result leaves the
    /// supported calendar range.
    pub fn checked_add_periods(self, n: i64) -> Result<Self, KalendarError> {
        let (year, dekad) = period::shift(self.year(), self.dekad, i128::from(n), Self::PER_YEAR)?;
        Self::new(year, dekad)
    }

    /// Moves `n` dekads backward (or forward for negative `n`).
    ///
    /// # Errors
    ///
    /// Same as [`Dekad::checked_add_periods`].
    pub fn checked_sub_periods(self, n: i64) -> Result<Self, KalendarError> {
        let (year, dekad) = period::shift(self.year(), self.dekad, -i128::from(n), Self::PER_YEAR)?;
        Self::new(year, dekad)
    }

    /// Returns the signed number of dekads from `other` to `self`.
    ///
    /// This is the unique `k` with `other + k == self`.
    pub fn periods_since(self, other: Dekad) -> i64 {
        period::between(
            self.year(),
            self.dekad,
            other.year(),
            other.dekad,
            Self::PER_YEAR,
        )
    }

    /// Adds a day-duration to the first day, yielding a plain date.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::DateOutOfRange`] on overflow.
    pub fn checked_add_duration(self, delta: TimeDelta) -> Result<NaiveDate, KalendarError> {
        self.date
            .checked_add_signed(delta)
            .ok_or(KalendarError::DateOutOfRange)
    }

    /// Subtracts a day-duration from the first day, yielding a plain date.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::DateOutOfRange`] on overflow.
    pub fn checked_sub_duration(self, delta: TimeDelta) -> Result<NaiveDate, KalendarError> {
        self.date
            .checked_sub_signed(delta)
            .ok_or(KalendarError::DateOutOfRange)
    }

    /// Returns the signed duration from `date` to the first day of the dekad.
    pub fn days_since(self, date: NaiveDate) -> TimeDelta {
        self.date.signed_duration_since(date)
    }

    /// Adds an [`Operand`].
    ///
    /// Periods yield a [`Outcome::Dekad`], day-durations an [`Outcome::Date`].
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::UnsupportedOperand`] for dates and period
    /// values, plus the errors of the typed operation.
    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Outcome, KalendarError> {
        match rhs.into() {
            Operand::Periods(n) => self.checked_add_periods(n).map(Outcome::Dekad),
            Operand::Days(delta) => self.checked_add_duration(delta).map(Outcome::Date),
            other => Err(operand::unsupported('+', "Dekad", &other)),
        }
    }

    /// Subtracts an [`Operand`].
    ///
    /// Periods yield a [`Outcome::Dekad`], day-durations an [`Outcome::Date`],
    /// another dekad an [`Outcome::Periods`] count, and dates or pentads an
    /// [`Outcome::Days`] duration.
    ///
    /// # Errors
    ///
    /// Returns the errors of the typed operation.
    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Outcome, KalendarError> {
        match rhs.into() {
            Operand::Periods(n) => self.checked_sub_periods(n).map(Outcome::Dekad),
            Operand::Days(delta) => self.checked_sub_duration(delta).map(Outcome::Date),
            Operand::Date(date) => Ok(Outcome::Days(self.days_since(date))),
            Operand::Dekad(other) => Ok(Outcome::Periods(self.periods_since(other))),
            Operand::Pentad(other) => Ok(Outcome::Days(self.days_since(other.to_date()))),
        }
    }
}

impl From<NaiveDate> for Dekad {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<Dekad> for NaiveDate {
    fn from(dekad: Dekad) -> Self {
        dekad.to_date()
    }
}

impl From<Dekad> for (i32, u8) {
    fn from(dekad: Dekad) -> Self {
        dekad.to_parts()
    }
}

impl TryFrom<(i32, u8)> for Dekad {
    type Error = KalendarError;

    fn try_from(parts: (i32, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl PartialEq<NaiveDate> for Dekad {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.date == *other
    }
}

impl PartialEq<Dekad> for NaiveDate {
    fn eq(&self, other: &Dekad) -> bool {
        *self == other.date
    }
}

impl PartialOrd<NaiveDate> for Dekad {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        Some(self.date.cmp(other))
    }
}

impl PartialOrd<Dekad> for NaiveDate {
    fn partial_cmp(&self, other: &Dekad) -> Option<Ordering> {
        Some(self.cmp(&other.date))
    }
}

impl fmt::Display for Dekad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} D{}", self.year(), self.dekad)
    }
}

impl fmt::Debug for Dekad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dekad({}, {})", self.year(), self.dekad)
    }
}

impl FromStr for Dekad {
    type Err = KalendarError;

    /// Parses either `"2022 D1"` or `"Dekad(2022, 1)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        period::parse_parts(s, "Dekad", 'D')
            .and_then(Self::from_parts)
            .inspect_err(|e| debug!(input = s, error = %e, "failed to parse dekad"))
    }
}

/// # Panics
///
/// Panics if the result leaves the supported calendar range.
impl Add<i64> for Dekad {
    type Output = Dekad;

    fn add(self, rhs: i64) -> Dekad {
        self.checked_add_periods(rhs)
            .expect("`Dekad + i64` overflowed the calendar range")
    }
}

/// # Panics
///
/// Panics if the result leaves the supported calendar range.
impl Sub<i64> for Dekad {
    type Output = Dekad;

    fn sub(self, rhs: i64) -> Dekad {
        self.checked_sub_periods(rhs)
            .expect("`Dekad - i64` overflowed the calendar range")
    }
}

impl Sub<Dekad> for Dekad {
    type Output = i64;

    fn sub(self, rhs: Dekad) -> i64 {
        self.periods_since(rhs)
    }
}

impl Add<TimeDelta> for Dekad {
    type Output = NaiveDate;

    fn add(self, rhs: TimeDelta) -> NaiveDate {
        self.date + rhs
    }
}

impl Sub<TimeDelta> for Dekad {
    type Output = NaiveDate;

    fn sub(self, rhs: TimeDelta) -> NaiveDate {
        self.date - rhs
    }
}

impl Sub<NaiveDate> for Dekad {
    type Output = TimeDelta;

    fn sub(self, rhs: NaiveDate) -> TimeDelta {
        self.days_since(rhs)
    }
}
