//! Proleptic solar calendar ↔ Julian Day Number conversion.
//!
//! Dates on or after 1582-10-15 are read as Gregorian, earlier dates as
//! Julian. All arithmetic is integer arithmetic with floor division, so the
//! conversion is exact for every year, including years before 4713 BC.

use std::time::{SystemTime, UNIX_EPOCH};

/// Julian Day Number of 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Julian Day Number of 1970-01-01, the UNIX epoch.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// First Julian Day Number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Julian Day Number of the last day of year `i32::MAX`, the largest day
/// whose solar year fits a [`SolarDate`](crate::SolarDate).
pub const MAX_SOLAR_JDN: i64 = 784_354_017_364;

/// Seconds per day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Convert a solar calendar date to a Julian Day Number.
///
/// `year` is an astronomical year number (1 BC is `0`).
pub fn solar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - m).div_euclid(12);
    let y2 = y + 4800 - a;
    let m2 = m + 12 * a - 3;
    let base = d + (153 * m2 + 2).div_euclid(5) + 365 * y2 + y2.div_euclid(4);
    if (year, month, day) >= (1582, 10, 15) {
        base - y2.div_euclid(100) + y2.div_euclid(400) - 32_045
    } else {
        base - 32_083
    }
}

/// Convert a Julian Day Number to a solar calendar `(year, month, day)`.
///
/// Years past the `i32` range saturate; days up to [`MAX_SOLAR_JDN`] convert
/// exactly.
pub fn jdn_to_solar(jdn: i64) -> (i32, u32, u32) {
    let (b, c) = if jdn >= GREGORIAN_REFORM_JDN {
        let a = jdn + 32_044;
        let b = (4 * a + 3).div_euclid(146_097);
        (b, a - (146_097 * b).div_euclid(4))
    } else {
        (0, jdn + 32_082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
    // month is in 1..=12 and day in 1..=31 by construction
    (year, month as u32, day as u32)
}

/// Julian Day Number of the UTC day containing a UNIX timestamp.
pub fn timestamp_to_jdn(unix_seconds: i64) -> i64 {
    unix_seconds.div_euclid(SECONDS_PER_DAY) + UNIX_EPOCH_JDN
}

/// Julian Day Number of the current UTC day.
pub fn today_jdn() -> i64 {
    let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };
    timestamp_to_jdn(secs)
}
