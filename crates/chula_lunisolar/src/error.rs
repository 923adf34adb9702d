//! Error types for lunisolar calendar conversion.

use chula_base::BaseError;
use thiserror::Error;

/// Errors from Chulasakarat date construction, conversion and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The date falls before the first supported day of the era.
    #[error("julian day {jdn} is before the Chulasakarat epoch")]
    EpochRange { jdn: i64 },
    /// The Julian Day Number is too large to place in a year.
    #[error("julian day {0} is outside the supported range")]
    OutOfRange(i64),
    /// The year number is too large to compute with.
    #[error("year {0} is outside the supported range")]
    YearRange(i64),
    /// The month does not occur in the given year.
    #[error("month {month} does not occur in year {year}")]
    InvalidMonth { year: i64, month: u8 },
    /// The day does not occur in the given month.
    #[error("day {day} is not valid in month {month}")]
    InvalidDay { month: u8, day: u8 },
    /// A formatted date string could not be parsed.
    #[error("date parse error: {0}")]
    Parse(String),
    /// Error from the solar calendar layer.
    #[error("solar date error: {0}")]
    Base(#[from] BaseError),
}
