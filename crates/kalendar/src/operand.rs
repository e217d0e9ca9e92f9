//! Tagged-union operands for mixed-type period arithmetic.
//!
//! [`Dekad::try_add`](crate::Dekad::try_add) and friends take an [`Operand`]
//! and return an [`Outcome`] whose variant depends on the operand:
//!
//! | Operation | `Periods` | `Days` | `Date` | `Dekad` / `Pentad` |
//! |-----------|-----------|--------|--------|--------------------|
//! | add | period | date | unsupported | unsupported |
//! | sub | period | date | days | periods (same type), days (other type) |

use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

use crate::dekad::Dekad;
use crate::error::KalendarError;
use crate::pentad::Pentad;

/// Right-hand side of a period arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A signed number of whole periods.
    Periods(i64),
    /// A signed day-duration.
    Days(TimeDelta),
    /// A calendar date.
    Date(NaiveDate),
    /// A dekad, standing for its first day unless the left side is also a dekad.
    Dekad(Dekad),
    /// A pentad, standing for its first day unless the left side is also a pentad.
    Pentad(Pentad),
}

impl Operand {
    /// Returns the type name reported in unsupported-operand errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Periods(_) => "i64",
            Operand::Days(_) => "TimeDelta",
            Operand::Date(_) => "NaiveDate",
            Operand::Dekad(_) => "Dekad",
            Operand::Pentad(_) => "Pentad",
        }
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Periods(n)
    }
}

impl From<TimeDelta> for Operand {
    fn from(delta: TimeDelta) -> Self {
        Operand::Days(delta)
    }
}

impl From<NaiveDate> for Operand {
    fn from(date: NaiveDate) -> Self {
        Operand::Date(date)
    }
}

impl From<Dekad> for Operand {
    fn from(dekad: Dekad) -> Self {
        Operand::Dekad(dekad)
    }
}

impl From<Pentad> for Operand {
    fn from(pentad: Pentad) -> Self {
        Operand::Pentad(pentad)
    }
}

/// Result of a period arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A shifted dekad.
    Dekad(Dekad),
    /// A shifted pentad.
    Pentad(Pentad),
    /// A calendar date, from adding or subtracting a day-duration.
    Date(NaiveDate),
    /// A signed period count between two values of the same type.
    Periods(i64),
    /// A signed day-duration between a period start and a date.
    Days(TimeDelta),
}

impl Outcome {
    /// Returns the dekad, if this outcome holds one.
    pub fn dekad(self) -> Option<Dekad> {
        match self {
            Outcome::Dekad(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the pentad, if this outcome holds one.
    pub fn pentad(self) -> Option<Pentad> {
        match self {
            Outcome::Pentad(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the date, if this outcome holds one.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Outcome::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the period count, if this outcome holds one.
    pub fn periods(self) -> Option<i64> {
        match self {
            Outcome::Periods(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the day-duration, if this outcome holds one.
    pub fn days(self) -> Option<TimeDelta> {
        match self {
            Outcome::Days(d) => Some(d),
            _ => None,
        }
    }
}

/// Builds the error for an operand the left-hand type cannot combine with.
pub(crate) fn unsupported(op: char, lhs: &'static str, rhs: &Operand) -> KalendarError {
    debug!(%op, lhs, rhs = rhs.type_name(), "rejected operand");
    KalendarError::UnsupportedOperand {
        op,
        lhs,
        rhs: rhs.type_name(),
    }
}
