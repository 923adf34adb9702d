//! Error types for solar date handling.

use thiserror::Error;

/// Errors from solar date parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// A `YYYY-MM-DD` string could not be parsed.
    #[error("solar date parse error: {0}")]
    Parse(String),
    /// The (year, month, day) triple names no day of the calendar.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
