//! Shared primitives for the Thai calendar crates.
//!
//! This crate provides:
//! - Proleptic solar calendar ↔ Julian Day Number conversion
//! - `SolarDate`, a plain (year, month, day) value with `YYYY-MM-DD` round-tripping
//! - `Weekday` derived from a Julian Day Number
//! - The `JulianDay` trait, the common ordinal key every calendar exposes
//! - Thai digit transliteration helpers

pub mod error;
pub mod julian;
pub mod script;
pub mod solar_date;
pub mod weekday;

pub use error::BaseError;
pub use julian::{
    GREGORIAN_REFORM_JDN, J2000_JDN, MAX_SOLAR_JDN, SECONDS_PER_DAY, UNIX_EPOCH_JDN, jdn_to_solar, solar_to_jdn,
    timestamp_to_jdn, today_jdn,
};
pub use script::{digits_to_arabic, digits_to_thai, thai_string_width};
pub use solar_date::SolarDate;
pub use weekday::{ALL_WEEKDAYS, Weekday};

/// Anything that can be placed on the absolute day line.
///
/// Every calendar date in the workspace implements this, so dates of
/// different calendars compare and subtract through their Julian Day Number.
pub trait JulianDay {
    /// Julian Day Number of this date.
    fn julian_day(&self) -> i64;

    /// Whole days from `other` to `self` (positive when `self` is later).
    fn days_since<T: JulianDay + ?Sized>(&self, other: &T) -> i64 {
        self.julian_day() - other.julian_day()
    }
}

impl JulianDay for i64 {
    fn julian_day(&self) -> i64 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_jdn_is_its_own_key() {
        assert_eq!(J2000_JDN.julian_day(), 2_451_545);
    }

    #[test]
    fn days_since_is_signed() {
        let a = SolarDate::new(2000, 1, 1);
        let b = SolarDate::new(2000, 1, 8);
        assert_eq!(b.days_since(&a), 7);
        assert_eq!(a.days_since(&b), -7);
    }
}
