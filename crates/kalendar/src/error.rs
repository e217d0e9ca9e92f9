//! Error types for the kalendar crate.

/// Error type for all fallible operations in the kalendar crate.
///
/// Range violations on the period index are raised before any date is
/// computed. Failures of the underlying calendar date conversions are passed
/// through with the offending input attached.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KalendarError {
    /// Returned when a dekad index is outside the valid range 1..=36.
    #[error("dekad must be between 1 and 36, got {dekad}")]
    InvalidDekad {
        /// The invalid dekad index that was provided.
        dekad: u8,
    },

    /// Returned when a pentad index is outside the valid range 1..=73.
    #[error("pentad must be between 1 and 73, got {pentad}")]
    InvalidPentad {
        /// The invalid pentad index that was provided.
        pentad: u8,
    },

    /// Returned when arithmetic is attempted with an operand the period type
    /// does not support.
    #[error("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperand {
        /// The operator symbol, `+` or `-`.
        op: char,
        /// Type name of the left-hand side.
        lhs: &'static str,
        /// Type name of the offending right-hand side.
        rhs: &'static str,
    },

    /// Returned when a string is not a valid ISO 8601 calendar date.
    #[error("invalid ISO date string: {0}")]
    InvalidIsoDate(#[from] chrono::ParseError),

    /// Returned when an ISO year/week/weekday triple names no date.
    #[error("invalid ISO calendar date: year {year}, week {week}, weekday {weekday}")]
    InvalidIsoCalendar {
        /// The ISO year.
        year: i32,
        /// The ISO week number.
        week: u32,
        /// The ISO weekday (1 = Monday, 7 = Sunday).
        weekday: u32,
    },

    /// Returned when a proleptic Gregorian ordinal is outside the supported range.
    #[error("ordinal {ordinal} is outside the supported calendar range")]
    InvalidOrdinal {
        /// The ordinal that was provided.
        ordinal: i64,
    },

    /// Returned when a POSIX timestamp is outside the supported range.
    #[error("timestamp {timestamp} is outside the supported calendar range")]
    InvalidTimestamp {
        /// The timestamp in seconds that was provided.
        timestamp: i64,
    },

    /// Returned when a constructed or shifted year cannot be represented.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i64,
    },

    /// Returned when adding or subtracting a day-duration leaves the
    /// supported calendar range.
    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,

    /// Returned when text matches neither the display nor the debug form.
    #[error("cannot parse {input:?} as a {kind}")]
    InvalidFormat {
        /// The period type being parsed.
        kind: &'static str,
        /// The rejected input.
        input: String,
    },
}
