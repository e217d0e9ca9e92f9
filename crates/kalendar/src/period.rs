//! Period-index arithmetic and text forms shared by the period types.

use tracing::trace;

use crate::error::KalendarError;

/// Shifts `(year, index)` by `n` periods in a year of `per_year` periods.
///
/// The index wraps into `1..=per_year` and the year moves by the floored
/// quotient, so negative `n` crosses year boundaries the same way positive
/// `n` does.
///
/// # Errors
///
/// Returns [`KalendarError::YearOutOfRange`] if the resulting year does not
/// fit in an `i32`.
pub(crate) fn shift(
    year: i32,
    index: u8,
    n: i128,
    per_year: u8,
) -> Result<(i32, u8), KalendarError> {
    let per_year = i128::from(per_year);
    let offset = i128::from(index) - 1 + n;
    let new_year = i128::from(year) + offset.div_euclid(per_year);
    let new_index = (offset.rem_euclid(per_year) + 1) as u8;
    trace!(year, index, %n, new_year = %new_year, new_index, "shifted period");
    let new_year = i32::try_from(new_year).map_err(|_| KalendarError::YearOutOfRange {
        year: i64::try_from(new_year).unwrap_or(i64::MAX),
    })?;
    Ok((new_year, new_index))
}

/// Returns the signed number of periods from `(other_year, other_index)` to `(year, index)`.
pub(crate) fn between(year: i32, index: u8, other_year: i32, other_index: u8, per_year: u8) -> i64 {
    i64::from(index) - i64::from(other_index)
        + i64::from(per_year) * (i64::from(year) - i64::from(other_year))
}

/// Parses the display form `"{year} {tag}{index}"` or the debug form
/// `"{name}({year}, {index})"` into `(year, index)`.
///
/// The index is not range-checked here.
pub(crate) fn parse_parts(
    s: &str,
    name: &'static str,
    tag: char,
) -> Result<(i32, u8), KalendarError> {
    let err = || KalendarError::InvalidFormat {
        kind: name,
        input: s.to_string(),
    };
    let text = s.trim();
    let debug_args = text
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'));
    let (year, index) = match debug_args {
        Some(args) => args.split_once(',').ok_or_else(err)?,
        None => {
            let (year, rest) = text.split_once(' ').ok_or_else(err)?;
            (year, rest.strip_prefix(tag).ok_or_else(err)?)
        }
    };
    let year = year.trim().parse().map_err(|_| err())?;
    let index = index.trim().parse().map_err(|_| err())?;
    Ok((year, index))
}
