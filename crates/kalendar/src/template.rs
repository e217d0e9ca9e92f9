//! No-leap reference calendar used to place pentads within a year.
//!
//! Pentad start dates are laid out on a 365-day year and reused unchanged for
//! every year, leap or not.

/// Day-of-year on which each month starts (index 0 unused, index 1 = January starts at DOY 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Number of days in the reference year.
pub(crate) const DAYS_PER_YEAR: u16 = 365;

/// Returns the `(month, day)` that `doy` falls on in the 365-day reference year.
///
/// `doy` must be in 1..=365.
pub(crate) fn noleap_month_day(doy: u16) -> (u32, u32) {
    debug_assert!((1..=DAYS_PER_YEAR).contains(&doy), "doy {doy} out of range");
    let month = MONTH_START_DOY[1..]
        .iter()
        .rposition(|&start| start <= doy)
        .map_or(1, |i| i + 1);
    (month as u32, u32::from(doy - MONTH_START_DOY[month] + 1))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, TimeDelta};

    use super::*;

    #[test]
    fn month_boundaries() {
        assert_eq!(noleap_month_day(1), (1, 1));
        assert_eq!(noleap_month_day(31), (1, 31));
        assert_eq!(noleap_month_day(32), (2, 1));
        assert_eq!(noleap_month_day(59), (2, 28));
        assert_eq!(noleap_month_day(60), (3, 1));
        assert_eq!(noleap_month_day(335), (12, 1));
        assert_eq!(noleap_month_day(365), (12, 31));
    }

    #[test]
    fn matches_gregorian_non_leap_year() {
        let jan1 = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        for doy in 1..=DAYS_PER_YEAR {
            let date = jan1 + TimeDelta::days(i64::from(doy) - 1);
            assert_eq!(
                noleap_month_day(doy),
                (date.month(), date.day()),
                "mismatch for doy {doy}"
            );
        }
    }
}
