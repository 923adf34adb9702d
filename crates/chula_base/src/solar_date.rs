//! Proleptic solar calendar date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::JulianDay;
use crate::error::BaseError;
use crate::julian::{jdn_to_solar, solar_to_jdn};

/// A solar calendar date: Gregorian from 1582-10-15, Julian before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Build a date without validation.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Build a date, rejecting triples that name no calendar day
    /// (including the ten days dropped by the Gregorian reform).
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, BaseError> {
        let invalid = BaseError::InvalidDate { year, month, day };
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid);
        }
        if jdn_to_solar(solar_to_jdn(year, month, day)) != (year, month, day) {
            return Err(invalid);
        }
        Ok(Self::new(year, month, day))
    }

    /// The solar date of a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_solar(jdn);
        Self { year, month, day }
    }
}

impl JulianDay for SolarDate {
    fn julian_day(&self) -> i64 {
        solar_to_jdn(self.year, self.month, self.day)
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for SolarDate {
    type Err = BaseError;

    /// Parse `YYYY-MM-DD` (a leading `-` marks a negative year).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(BaseError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| BaseError::Parse(format!("year {:?}: {e}", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| BaseError::Parse(format!("month {:?}: {e}", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| BaseError::Parse(format!("day {:?}: {e}", parts[2])))?;
        Self::try_new(sign * year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads() {
        assert_eq!(SolarDate::new(638, 3, 22).to_string(), "0638-03-22");
        assert_eq!(SolarDate::new(-44, 3, 15).to_string(), "-0044-03-15");
    }

    #[test]
    fn parse_roundtrip() {
        let d: SolarDate = "2000-01-01".parse().unwrap();
        assert_eq!(d, SolarDate::new(2000, 1, 1));
        assert_eq!(d.julian_day(), 2_451_545);
        let n: SolarDate = "-0044-03-15".parse().unwrap();
        assert_eq!(n.year, -44);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2000/01/01".parse::<SolarDate>(), Err(BaseError::Parse(_))));
        assert!(matches!("2000-xx-01".parse::<SolarDate>(), Err(BaseError::Parse(_))));
    }

    #[test]
    fn reform_gap_is_invalid() {
        assert!(SolarDate::try_new(1582, 10, 10).is_err());
        assert!(SolarDate::try_new(1582, 10, 4).is_ok());
        assert!(SolarDate::try_new(1582, 10, 15).is_ok());
    }

    #[test]
    fn leap_rules_follow_calendar() {
        // 1500 is a Julian leap year, 1900 is not a Gregorian one
        assert!(SolarDate::try_new(1500, 2, 29).is_ok());
        assert!(SolarDate::try_new(1900, 2, 29).is_err());
        assert!(SolarDate::try_new(2000, 2, 29).is_ok());
        assert!(SolarDate::try_new(2001, 4, 31).is_err());
    }

    #[test]
    fn from_jdn_matches_bridge() {
        assert_eq!(SolarDate::from_jdn(1_954_168), SolarDate::new(638, 3, 22));
    }
}
