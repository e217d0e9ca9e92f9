//! Five-day periods, 73 per year.

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
use crate::template;

/// A pentad: one of the 73 five-day periods of a year.
///
/// Pentad 1 starts on January 1, pentad 2 on January 6, and so on through
/// pentad 73 starting on December 27. Start dates come from a 365-day
/// reference year and are the same in every year. In leap years pentad 12
/// (February 25 to March 1) is six days long and absorbs February 29, so the
/// numbering of later pentads is unchanged.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalendar::Pentad;
///
/// let p = Pentad::new(2012, 12).unwrap();
/// assert_eq!(p.to_date(), NaiveDate::from_ymd_opt(2012, 2, 25).unwrap());
/// assert_eq!((p + 1).to_date(), NaiveDate::from_ymd_opt(2012, 3, 2).unwrap());
/// assert_eq!(Pentad::from_iso_format("2012-02-29").unwrap(), p);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "(i32, u8)", try_from = "(i32, u8)"))]
pub struct Pentad {
    date: NaiveDate,
    pentad: u8,
}

/// Returns the pentad of the year (1..=73) containing `date`.
///
/// From February 29 onward in a leap year the day of year is shifted back by
/// one, which stretches pentad 12 to six days.
pub(crate) fn pentad_of(date: NaiveDate) -> u8 {
    let yday = date::day_of_year(date);
    let offset = if date::is_leap_year(date.year()) && yday >= 60 {
        yday - 2
    } else {
        yday - 1
    };
    (1 + offset / 5) as u8
}

impl Pentad {
    /// Number of pentads in every year.
    pub const PER_YEAR: u8 = 73;

    /// Creates the `pentad`-th pentad (1..=73) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidPentad`] if `pentad` is outside 1..=73,
    /// and [`KalendarError::YearOutOfRange`] if `year` is outside the
    /// supported calendar range.
    pub fn new(year: i32, pentad: u8) -> Result<Self, KalendarError> {
        if !(1..=Self::PER_YEAR).contains(&pentad) {
            return Err(KalendarError::InvalidPentad { pentad });
        }
        let (month, day) = template::noleap_month_day(5 * (u16::from(pentad) - 1) + 1);
        let date = date::from_ymd(year, month, day)?;
        debug_assert_eq!(pentad_of(date), pentad);
        Ok(Self { date, pentad })
    }

    /// Returns the pentad containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), pentad_of(date)).expect("pentad of an existing date is valid")
    }

    /// Returns the pentad containing the date part of `datetime`.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self::from_date(datetime.date())
    }

    /// Returns the pentad containing an ISO 8601 date (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidIsoDate`] if `s` is not a valid date.
    #[tracing::instrument(level = "trace")]
    pub fn from_iso_format(s: &str) -> Result<Self, KalendarError> {
        date::from_iso_format(s).map(Self::from_date)
    }

    /// Returns the pentad containing an ISO year/week/weekday date.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidIsoCalendar`] if the triple names no date.
    pub fn from_iso_calendar(year: i32, week: u32, weekday: u32) -> Result<Self, KalendarError> {
        date::from_iso_calendar(year, week, weekday).map(Self::from_date)
    }

    /// Returns the pentad containing the UTC date of a POSIX timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidTimestamp`] if the timestamp is out of range.
    pub fn from_timestamp(timestamp: i64) -> Result<Self, KalendarError> {
        date::from_timestamp(timestamp).map(Self::from_date)
    }

    /// Returns the pentad containing a proleptic Gregorian ordinal (0001-01-01 is day 1).
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::InvalidOrdinal`] if the ordinal is out of range.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, KalendarError> {
        date::from_ordinal(ordinal).map(Self::from_date)
    }

    /// Rebuilds a pentad from the `(year, pentad)` pair returned by [`Pentad::to_parts`].
    ///
    /// # Errors
    ///
    /// Same as [`Pentad::new`].
    pub fn from_parts((year, pentad): (i32, u8)) -> Result<Self, KalendarError> {
        Self::new(year, pentad)
    }

    /// Reduces the pentad to its constructor arguments `(year, pentad)`.
    pub fn to_parts(self) -> (i32, u8) {
        (self.year(), self.pentad)
    }

    /// Returns the first day of the pentad.
    pub fn to_date(self) -> NaiveDate {
        self.date
    }

    /// Returns the pentad of the year (1..=73).
    pub fn pentad(self) -> u8 {
        self.pentad
    }

    pub fn year(self) -> i32 {
        self.date.year()
    }

    pub fn month(self) -> u32 {
        self.date.month()
    }

    pub fn day(self) -> u32 {
        self.date.day()
    }

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

    /// Moves `n` pentads forward (or backward for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::YearOutOfRange`] if the result leaves the
    /// supported calendar range.
    pub fn checked_add_periods(self, n: i64) -> Result<Self, KalendarError> {
        let (year, pentad) =
            period::shift(self.year(), self.pentad, i128::from(n), Self::PER_YEAR)?;
        Self::new(year, pentad)
    }

    /// Moves `n` pentads backward (or forward for negative `n`).
    ///
    /// # Errors
    ///
    /// Same as [`Pentad::checked_add_periods`].
    pub fn checked_sub_periods(self, n: i64) -> Result<Self, KalendarError> {
        let (year, pentad) =
            period::shift(self.year(), self.pentad, -i128::from(n), Self::PER_YEAR)?;
        Self::new(year, pentad)
    }

    /// Returns the signed number of pentads from `other` to `self`.
    pub fn periods_since(self, other: Pentad) -> i64 {
        period::between(
            self.year(),
            self.pentad,
            other.year(),
            other.pentad,
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

    /// Returns the signed duration from `date` to the first day of the pentad.
    pub fn days_since(self, date: NaiveDate) -> TimeDelta {
        self.date.signed_duration_since(date)
    }

    /// Adds an [`Operand`]; see the [`operand`](crate::operand) module for
    /// the result of each combination.
    ///
    /// # Errors
    ///
    /// Returns [`KalendarError::UnsupportedOperand`] for dates and period
    /// values, plus the errors of the typed operation.
    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Outcome, KalendarError> {
        match rhs.into() {
            Operand::Periods(n) => self.checked_add_periods(n).map(Outcome::Pentad),
            Operand::Days(delta) => self.checked_add_duration(delta).map(Outcome::Date),
            other => Err(operand::unsupported('+', "Pentad", &other)),
        }
    }

    /// Subtracts an [`Operand`]; see the [`operand`](crate::operand) module
    /// for the result of each combination.
    ///
    /// # Errors
    ///
    /// Returns the errors of the typed operation.
    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Outcome, KalendarError> {
        match rhs.into() {
            Operand::Periods(n) => self.checked_sub_periods(n).map(Outcome::Pentad),
            Operand::Days(delta) => self.checked_sub_duration(delta).map(Outcome::Date),
            Operand::Date(date) => Ok(Outcome::Days(self.days_since(date))),
            Operand::Pentad(other) => Ok(Outcome::Periods(self.periods_since(other))),
            Operand::Dekad(other) => Ok(Outcome::Days(self.days_since(other.to_date()))),
        }
    }
}

impl From<NaiveDate> for Pentad {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<Pentad> for NaiveDate {
    fn from(pentad: Pentad) -> Self {
        pentad.to_date()
    }
}

impl From<Pentad> for (i32, u8) {
    fn from(pentad: Pentad) -> Self {
        pentad.to_parts()
    }
}

impl TryFrom<(i32, u8)> for Pentad {
    type Error = KalendarError;

    fn try_from(parts: (i32, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl PartialEq<NaiveDate> for Pentad {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.date == *other
    }
}

impl PartialEq<Pentad> for NaiveDate {
    fn eq(&self, other: &Pentad) -> bool {
        *self == other.date
    }
}

impl PartialOrd<NaiveDate> for Pentad {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        Some(self.date.cmp(other))
    }
}

impl PartialOrd<Pentad> for NaiveDate {
    fn partial_cmp(&self, other: &Pentad) -> Option<Ordering> {
        Some(self.cmp(&other.date))
    }
}

impl fmt::Display for Pentad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.year(), self.pentad)
    }
}

impl fmt::Debug for Pentad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pentad({}, {})", self.year(), self.pentad)
    }
}

impl FromStr for Pentad {
    type Err = KalendarError;

    /// Parses either `"2022 P1"` or `"Pentad(2022, 1)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        period::parse_parts(s, "Pentad", 'P')
            .and_then(Self::from_parts)
            .inspect_err(|e| debug!(input = s, error = %e, "failed to parse pentad"))
    }
}

/// # Panics
///
/// Panics if the result leaves the supported calendar range.
impl Add<i64> for Pentad {
    type Output = Pentad;

    fn add(self, rhs: i64) -> Pentad {
        self.checked_add_periods(rhs)
            .expect("`Pentad + i64` overflowed the calendar range")
    }
}

/// # Panics
///
/// Panics if the result leaves the supported calendar range.
impl Sub<i64> for Pentad {
    type Output = Pentad;

    fn sub(self, rhs: i64) -> Pentad {
        self.checked_sub_periods(rhs)
            .expect("`Pentad - i64` overflowed the calendar range")
    }
}

impl Sub<Pentad> for Pentad {
    type Output = i64;

    fn sub(self, rhs: Pentad) -> i64 {
        self.periods_since(rhs)
    }
}

impl Add<TimeDelta> for Pentad {
    type Output = NaiveDate;

    fn add(self, rhs: TimeDelta) -> NaiveDate {
        self.date + rhs
    }
}

impl Sub<TimeDelta> for Pentad {
    type Output = NaiveDate;

    fn sub(self, rhs: TimeDelta) -> NaiveDate {
        self.date - rhs
    }
}

impl Sub<NaiveDate> for Pentad {
    type Output = TimeDelta;

    fn sub(self, rhs: NaiveDate) -> TimeDelta {
        self.days_since(rhs)
    }
}
