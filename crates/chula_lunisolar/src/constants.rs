//! Fixed parameters of the Chulasakarat reckoning.

/// Days in 800 solar years.
pub const DAYS_IN_800_YEARS: i64 = 292_207;

/// Kammabucapon units per day.
pub const TIME_UNITS_IN_1_DAY: i64 = 800;

/// Kammabucapon units elapsed before the first year start.
pub const EPOCH_OFFSET: i64 = 373;

/// Uccapon at horakhun 0.
pub const UCCAPON_CONSTANT: i64 = 2611;

/// Period of the lunar apogee in days.
pub const APOGEE_ROTATION_DAYS: i64 = 3232;

/// Avoman modulus (units per lunar day).
pub const AVOMAN_UNITS: i64 = 692;

/// Julian Day Number of horakhun 0.
pub const CS_JULIAN_DAY_OFFSET: i64 = 1_954_167;

/// Earliest supported Julian Day Number (horakhun 1, 638-03-22).
pub const CS_MIN_JULIAN_DAY: i64 = 1_954_168;

/// Remainder of horakhun modulo `DAYS_IN_800_YEARS` at which the year
/// estimate from a Julian Day Number lands one year late.
///
/// This is the last day of a solar leap year that is also a leap-month
/// year; it recurs once every 800 years.
pub const CYCLE_BOUNDARY_REMAINDER: i64 = 95_333;

/// Largest year magnitude accepted by the converter.
pub const MAX_YEAR: i64 = i32::MAX as i64;

/// Largest Julian Day Number accepted by the converter: the last day whose
/// solar date is representable.
pub const MAX_JULIAN_DAY: i64 = chula_base::MAX_SOLAR_JDN;
