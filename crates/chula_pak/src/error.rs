//! Error types for the Pakkhakhananaa calendar.

use thiserror::Error;

/// Errors from Pak date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PakError {
    /// The day is on or before the Pak epoch.
    #[error("julian day {jdn} is not after the Pakkhakhananaa epoch")]
    EpochRange { jdn: i64 },
    /// Day arithmetic left the representable range.
    #[error("julian day {0} is outside the supported range")]
    OutOfRange(i64),
    /// A Pak code string could not be parsed.
    #[error("pak code parse error: {0}")]
    Parse(String),
    /// A row value has no place on the layout board.
    #[error("row {row} value {value} does not fit the layout board")]
    Layout { row: usize, value: i64 },
}
