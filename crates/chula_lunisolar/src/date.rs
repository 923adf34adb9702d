//! Chulasakarat calendar dates.
//!
//! A [`CsDate`] is a day of the Thai lunisolar calendar: a year, a lunar
//! month and a day of that month (1..=30, days above 15 falling in the
//! waning half). Every date carries its horakhun, the day count from the
//! era epoch, which is its position on the absolute day line.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use chula_base::{JulianDay, SolarDate, Weekday, timestamp_to_jdn, today_jdn};
use tracing::{debug, trace};

use crate::constants::{
    CS_JULIAN_DAY_OFFSET, CS_MIN_JULIAN_DAY, CYCLE_BOUNDARY_REMAINDER, DAYS_IN_800_YEARS,
    EPOCH_OFFSET, MAX_JULIAN_DAY, MAX_YEAR, TIME_UNITS_IN_1_DAY,
};
use crate::epoch::{DayCounters, year_horakhun};
use crate::error::CalendarError;
use crate::month::{Month, Occurrence, locate, month_span};
use crate::naksatr::Naksatr;
use crate::resolver::ResolvedYear;
use crate::year_type::YearType;

/// Years in one kamma cycle; `year_horakhun` advances by exactly
/// `DAYS_IN_800_YEARS` over this span.
const CYCLE_YEARS: i64 = 800;

/// Days in the first lunar month, used to place a month-6 day before
/// new-year's day.
const FIRST_MONTH_DAYS: u8 = 29;

/// Last day of the waxing half of a month.
const WAXING_DAYS: u8 = 15;

fn check_year(year: i64) -> Result<(), CalendarError> {
    if (-MAX_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearRange(year))
    }
}

/// A date of the Chulasakarat lunisolar calendar.
///
/// Dates compare, hash and subtract by day position only.
#[derive(Debug, Clone, Copy)]
pub struct CsDate {
    resolved: ResolvedYear,
    month: Month,
    day: u8,
    day_of_year: i64,
    horakhun: i64,
    counters: DayCounters,
}

impl CsDate {
    /// Date from a year, a month code (1..=12, 88, 15 or 16) and a day.
    ///
    /// A first month 5 or 6 whose day falls before new-year's day is read
    /// as the trailing month at the end of the year.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let m = Month::from_raw(month).ok_or(CalendarError::InvalidMonth { year, month })?;
        Self::from_month(year, m, day)
    }

    /// Date from a year, a [`Month`] and a day.
    pub fn from_month(year: i64, month: Month, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        Self::in_year(&ResolvedYear::for_year(year), month, day)
    }

    /// Date within an already resolved year.
    ///
    /// Callers building many dates of one year can resolve it once with
    /// [`ResolvedYear::for_year`] and reuse it here.
    pub fn in_year(resolved: &ResolvedYear, month: Month, day: u8) -> Result<Self, CalendarError> {
        let year = resolved.year();
        let month = match (month.number(), month.occurrence()) {
            (5, Occurrence::First) if i64::from(day) < resolved.offset_days() => {
                Month::trailing(5)
            }
            (6, Occurrence::First)
                if i64::from(FIRST_MONTH_DAYS) + i64::from(day) < resolved.offset_days() =>
            {
                Month::trailing(6)
            }
            _ => month,
        };
        let (start, len) = month_span(resolved.year_type(), month).ok_or(
            CalendarError::InvalidMonth {
                year,
                month: month.raw(),
            },
        )?;
        if day == 0 || i64::from(day) > len {
            return Err(CalendarError::InvalidDay {
                month: month.raw(),
                day,
            });
        }
        let day_of_year = start + i64::from(day) - resolved.offset_days();
        let horakhun = resolved.horakhun() + day_of_year;
        let jdn = horakhun + CS_JULIAN_DAY_OFFSET;
        if jdn < CS_MIN_JULIAN_DAY {
            return Err(CalendarError::EpochRange { jdn });
        }
        if jdn > MAX_JULIAN_DAY {
            return Err(CalendarError::OutOfRange(jdn));
        }
        trace!(year, month = month.raw(), day, day_of_year, horakhun, "date");
        Ok(Self {
            resolved: *resolved,
            month,
            day,
            day_of_year,
            horakhun,
            counters: DayCounters::at(horakhun),
        })
    }

    /// Date `days` days after the solar start of `year`.
    ///
    /// Day counts beyond the solar year carry into the following years. A
    /// count equal to the solar year length stays in `year`, as the last
    /// day of its trailing month. Negative counts reach back into the
    /// preceding years and land in `0..solar_days`.
    pub fn from_year_and_day_offset(year: i64, days: i64) -> Result<Self, CalendarError> {
        check_year(year)?;
        // whole cycles only, leaving a positive count positive so the walk
        // below sees the same boundary days as a year-by-year walk
        let cycles = if days > 0 {
            (days - 1).div_euclid(DAYS_IN_800_YEARS)
        } else {
            days / DAYS_IN_800_YEARS
        };
        let mut year = cycles
            .checked_mul(CYCLE_YEARS)
            .and_then(|y| y.checked_add(year))
            .ok_or(CalendarError::YearRange(year))?;
        check_year(year)?;
        let mut days = days - cycles * DAYS_IN_800_YEARS;

        let mut resolved = ResolvedYear::for_year(year);
        while days < 0 {
            year -= 1;
            check_year(year)?;
            resolved = ResolvedYear::for_year(year);
            days += resolved.solar_days();
            trace!(year, days, "year walk back");
        }
        while days > resolved.solar_days() {
            days -= resolved.solar_days();
            year += 1;
            check_year(year)?;
            resolved = ResolvedYear::for_year(year);
            trace!(year, days, "year walk");
        }
        debug!(year, days, year_type = %resolved.year_type(), "day offset placed");

        let (month, day) = locate(resolved.year_type(), resolved.offset_days() + days);
        // out-of-range days are rejected by `in_year`
        let day = u8::try_from(day).unwrap_or(u8::MAX);
        Self::in_year(&resolved, month, day)
    }

    /// Date of a Julian Day Number.
    pub fn from_julian_day(jdn: i64) -> Result<Self, CalendarError> {
        if jdn < CS_MIN_JULIAN_DAY {
            return Err(CalendarError::EpochRange { jdn });
        }
        if jdn > MAX_JULIAN_DAY {
            return Err(CalendarError::OutOfRange(jdn));
        }
        let horakhun = jdn - CS_JULIAN_DAY_OFFSET;
        let mut year = (horakhun * TIME_UNITS_IN_1_DAY - EPOCH_OFFSET).div_euclid(DAYS_IN_800_YEARS);
        let days = if horakhun.rem_euclid(DAYS_IN_800_YEARS) == CYCLE_BOUNDARY_REMAINDER {
            // the year estimate runs one ahead on this day of every cycle
            year -= 1;
            debug!(jdn, year, "kamma cycle boundary");
            365
        } else {
            horakhun - year_horakhun(year)
        };
        debug!(jdn, year, days, "julian day placed");
        Self::from_year_and_day_offset(year, days)
    }

    /// Date of the UTC day containing a UNIX timestamp.
    pub fn from_timestamp(unix_seconds: i64) -> Result<Self, CalendarError> {
        Self::from_julian_day(timestamp_to_jdn(unix_seconds))
    }

    /// Today's date (UTC).
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_julian_day(today_jdn())
    }

    /// Date of the same day as a solar date.
    pub fn from_solar(date: &SolarDate) -> Result<Self, CalendarError> {
        Self::from_julian_day(date.julian_day())
    }

    /// Julian Day Number of this date.
    pub fn to_julian_day(&self) -> i64 {
        self.horakhun + CS_JULIAN_DAY_OFFSET
    }

    /// Solar calendar date of the same day.
    pub fn to_solar(&self) -> SolarDate {
        SolarDate::from_jdn(self.to_julian_day())
    }

    /// The date `n` days later.
    pub fn add_days(&self, n: i64) -> Result<Self, CalendarError> {
        let jdn = self.to_julian_day();
        let target = jdn
            .checked_add(n)
            .ok_or(CalendarError::OutOfRange(jdn))?;
        Self::from_julian_day(target)
    }

    /// The date `n` days earlier.
    pub fn subtract_days(&self, n: i64) -> Result<Self, CalendarError> {
        let jdn = self.to_julian_day();
        let target = jdn
            .checked_sub(n)
            .ok_or(CalendarError::OutOfRange(jdn))?;
        Self::from_julian_day(target)
    }

    /// Replace year, month code and day, validating the result.
    pub fn with_ymd(&self, year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day)
    }

    pub fn with_year(&self, year: i64) -> Result<Self, CalendarError> {
        Self::new(year, self.month(), self.day)
    }

    /// Replace the month (1..=12 or 88), keeping year and day.
    pub fn with_month(&self, month: u8) -> Result<Self, CalendarError> {
        Self::new(self.year(), month, self.day)
    }

    pub fn with_day(&self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.year(), self.month(), day)
    }

    pub fn year(&self) -> i64 {
        self.resolved.year()
    }

    /// Month number as written: 1..=12, or 88 for the intercalary month.
    pub fn month(&self) -> u8 {
        self.month.logical()
    }

    /// Month code distinguishing trailing months (15, 16) from the first
    /// months 5 and 6 of the year.
    pub fn month_raw(&self) -> u8 {
        self.month.raw()
    }

    pub fn lunar_month(&self) -> Month {
        self.month
    }

    /// Day of the month, 1..=30.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Whether the day falls in the waxing half (ขึ้น) of the month.
    pub fn is_waxing(&self) -> bool {
        self.day <= WAXING_DAYS
    }

    /// Day within the waxing or waning half, 1..=15.
    pub fn phase_day(&self) -> u8 {
        if self.is_waxing() {
            self.day
        } else {
            self.day - WAXING_DAYS
        }
    }

    /// Days since the solar start of the year.
    pub fn day_of_year(&self) -> i64 {
        self.day_of_year
    }

    /// Days since the era epoch.
    pub fn horakhun(&self) -> i64 {
        self.horakhun
    }

    /// Kammabucapon of the year.
    pub fn kammabucapon(&self) -> i64 {
        self.resolved.kamma()
    }

    pub fn uccapon(&self) -> i64 {
        self.counters.uccapon
    }

    pub fn avoman(&self) -> i64 {
        self.counters.avoman
    }

    pub fn masaken(&self) -> i64 {
        self.counters.masaken
    }

    pub fn tithi(&self) -> i64 {
        self.counters.tithi
    }

    /// The resolved year this date belongs to.
    pub fn resolved_year(&self) -> &ResolvedYear {
        &self.resolved
    }

    pub fn year_type(&self) -> YearType {
        self.resolved.year_type()
    }

    /// Whether the lunar year has an intercalary day.
    pub fn leap_day(&self) -> bool {
        self.year_type() == YearType::LeapDay
    }

    /// Whether the lunar year has an intercalary month.
    pub fn leap_month(&self) -> bool {
        self.year_type() == YearType::LeapMonth
    }

    /// Whether the solar year has 366 days.
    pub fn solar_leap_year(&self) -> bool {
        self.resolved.leap_day()
    }

    /// Days in the lunar year: 354, 355 or 384.
    pub fn days_in_year(&self) -> i64 {
        self.resolved.caldays()
    }

    pub fn naksatr(&self) -> Naksatr {
        Naksatr::from_cs_year(self.year())
    }

    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_jdn(self.to_julian_day())
    }

    /// Thai weekday count, Saturday = 0 .. Friday = 6.
    pub fn cs_weekday(&self) -> u8 {
        self.day_of_week().cs_index()
    }

    /// Weekday with Monday = 0 .. Sunday = 6.
    pub fn weekday(&self) -> u8 {
        self.day_of_week().index()
    }

    /// ISO weekday, Monday = 1 .. Sunday = 7.
    pub fn iso_weekday(&self) -> u8 {
        self.day_of_week().iso_number()
    }
}

impl JulianDay for CsDate {
    fn julian_day(&self) -> i64 {
        self.to_julian_day()
    }
}

impl PartialEq for CsDate {
    fn eq(&self, other: &Self) -> bool {
        self.horakhun == other.horakhun
    }
}

impl Eq for CsDate {}

impl Hash for CsDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.horakhun.hash(state);
    }
}

impl PartialOrd for CsDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CsDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.horakhun.cmp(&other.horakhun)
    }
}

impl PartialEq<SolarDate> for CsDate {
    fn eq(&self, other: &SolarDate) -> bool {
        self.julian_day() == other.julian_day()
    }
}

impl PartialEq<CsDate> for SolarDate {
    fn eq(&self, other: &CsDate) -> bool {
        self.julian_day() == other.julian_day()
    }
}

impl PartialOrd<SolarDate> for CsDate {
    fn partial_cmp(&self, other: &SolarDate) -> Option<Ordering> {
        Some(self.julian_day().cmp(&other.julian_day()))
    }
}

impl PartialOrd<CsDate> for SolarDate {
    fn partial_cmp(&self, other: &CsDate) -> Option<Ordering> {
        Some(self.julian_day().cmp(&other.julian_day()))
    }
}

impl Sub for CsDate {
    type Output = i64;

    /// Signed day difference.
    fn sub(self, rhs: CsDate) -> i64 {
        self.horakhun - rhs.horakhun
    }
}

impl Sub<SolarDate> for CsDate {
    type Output = i64;

    fn sub(self, rhs: SolarDate) -> i64 {
        self.days_since(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(d: &CsDate) -> (i64, u8, u8) {
        (d.year(), d.month_raw(), d.day())
    }

    #[test]
    fn new_years_day_1200() {
        let d = CsDate::new(1200, 5, 19).unwrap();
        assert_eq!(d.to_julian_day(), 2_392_478);
        assert_eq!(d.day_of_year(), 0);
        assert_eq!(d.horakhun(), 438_311);
        assert_eq!((d.weekday(), d.iso_weekday(), d.cs_weekday()), (4, 5, 6));
        assert_eq!(d.kammabucapon(), 27);
        assert_eq!(d.tithi(), 19);
    }

    #[test]
    fn early_month_5_is_trailing() {
        // month 5 day 1 of 1200 precedes new-year's day, so it is the
        // month 5 at the end of the year
        let d = CsDate::new(1200, 5, 1).unwrap();
        assert_eq!(d.month_raw(), 15);
        assert_eq!(d.month(), 5);
        assert_eq!(d.to_julian_day(), 2_392_815);
        assert_eq!(d.day_of_year(), 337);
    }

    #[test]
    fn month_6_before_new_year_in_leap_month_year_is_invalid() {
        // 1383 starts in month 6; its trailing month 6 has no place
        assert_eq!(
            CsDate::new(1383, 6, 1),
            Err(CalendarError::InvalidMonth {
                year: 1383,
                month: 16
            })
        );
    }

    #[test]
    fn intercalary_month_only_in_leap_month_year() {
        assert!(CsDate::new(1201, 88, 2).is_ok());
        assert_eq!(
            CsDate::new(1200, 88, 1),
            Err(CalendarError::InvalidMonth {
                year: 1200,
                month: 88
            })
        );
        assert!(matches!(
            CsDate::new(1200, 13, 1),
            Err(CalendarError::InvalidMonth { month: 13, .. })
        ));
    }

    #[test]
    fn day_bounds() {
        assert!(matches!(
            CsDate::new(1200, 7, 0),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
        // month 7 has 29 days in an ordinary year, 30 with the leap day
        assert!(CsDate::new(1050, 7, 30).is_err());
        assert!(CsDate::new(1200, 7, 30).is_ok());
    }

    #[test]
    fn before_epoch_rejected() {
        assert!(matches!(
            CsDate::from_julian_day(CS_MIN_JULIAN_DAY - 1),
            Err(CalendarError::EpochRange { .. })
        ));
        assert!(matches!(
            CsDate::new(-1, 7, 1),
            Err(CalendarError::EpochRange { .. })
        ));
        let first = CsDate::from_julian_day(CS_MIN_JULIAN_DAY).unwrap();
        assert_eq!(first.horakhun(), 1);
        assert!(first.subtract_days(1).is_err());
    }

    #[test]
    fn huge_inputs_rejected() {
        assert!(matches!(
            CsDate::from_julian_day(i64::MAX),
            Err(CalendarError::OutOfRange(_))
        ));
        assert!(matches!(
            CsDate::new(i64::MAX, 7, 1),
            Err(CalendarError::YearRange(_))
        ));
        let d = CsDate::new(1200, 7, 1).unwrap();
        assert!(d.add_days(i64::MAX).is_err());
    }

    #[test]
    fn every_built_date_accepts_zero_day_arithmetic() {
        assert!(matches!(
            CsDate::new(MAX_YEAR, 7, 1),
            Err(CalendarError::OutOfRange(_))
        ));
        let last = CsDate::from_julian_day(MAX_JULIAN_DAY).unwrap();
        assert_eq!(last.add_days(0).unwrap(), last);
        assert!(last.add_days(1).is_err());
        let solar = last.to_solar();
        assert_eq!((solar.year, solar.month, solar.day), (i32::MAX, 12, 31));
        assert_eq!(CsDate::from_solar(&solar).unwrap(), last);
    }

    #[test]
    fn day_offset_walks_both_ways() {
        let base = CsDate::from_year_and_day_offset(1200, 0).unwrap();
        // 1200 has 366 solar days; day 366 is still counted in 1200
        let last = CsDate::from_year_and_day_offset(1200, 366).unwrap();
        assert_eq!(last.year(), 1200);
        assert_eq!(last.day_of_year(), 366);
        assert_eq!(last.month_raw(), 16);
        assert_eq!(last - base, 366);
        assert_eq!(last, CsDate::from_year_and_day_offset(1201, 0).unwrap());
        let next = CsDate::from_year_and_day_offset(1200, 367).unwrap();
        assert_eq!(next.year(), 1201);
        assert_eq!(next.day_of_year(), 1);
        let back = CsDate::from_year_and_day_offset(1201, -366).unwrap();
        assert_eq!(back, base);
        assert_eq!(back.year(), 1200);
        assert_eq!(back.day_of_year(), 0);
        let far = CsDate::from_year_and_day_offset(400, 800 * 365 + 10_000).unwrap();
        assert_eq!(far.horakhun(), year_horakhun(400) + 800 * 365 + 10_000);
    }

    #[test]
    fn full_solar_year_offset_stays_in_year() {
        // year 1 has 365 solar days; day 365 is the last day of its
        // trailing month 5, the same day as new-year's day of year 2
        let last = CsDate::from_year_and_day_offset(1, 365).unwrap();
        assert_eq!(ymd(&last), (1, 15, 23));
        assert_eq!(last.day_of_year(), 365);
        assert_eq!(last.to_julian_day(), 1_954_898);
        let first = CsDate::from_year_and_day_offset(2, 0).unwrap();
        assert_eq!(ymd(&first), (2, 5, 23));
        assert_eq!(first, last);
        let past = CsDate::from_year_and_day_offset(1, 366).unwrap();
        assert_eq!(past.year(), 2);
        assert_eq!(past.day_of_year(), 1);
    }

    #[test]
    fn whole_cycle_offset_matches_year_walk() {
        let jumped = CsDate::from_year_and_day_offset(400, DAYS_IN_800_YEARS).unwrap();
        assert_eq!(jumped.year(), 1199);
        assert_eq!(jumped.day_of_year(), jumped.resolved_year().solar_days());
        assert_eq!(jumped.horakhun(), year_horakhun(1200));
    }

    #[test]
    fn julian_day_roundtrip_sample() {
        for jdn in (2_300_000..2_310_000).step_by(7) {
            let d = CsDate::from_julian_day(jdn).unwrap();
            assert_eq!(d.to_julian_day(), jdn);
            let again = CsDate::new(d.year(), d.month_raw(), d.day()).unwrap();
            assert_eq!(ymd(&again), ymd(&d));
        }
    }

    #[test]
    fn arithmetic() {
        let d = CsDate::new(1201, 88, 2).unwrap();
        let later = d.add_days(100).unwrap();
        assert_eq!(later - d, 100);
        assert_eq!(later.subtract_days(100).unwrap(), d);
        assert_eq!(d.add_days(-5).unwrap(), d.subtract_days(5).unwrap());
    }

    #[test]
    fn solar_comparisons() {
        let d = CsDate::from_julian_day(2_451_545).unwrap();
        let new_year_2000 = SolarDate::new(2000, 1, 1);
        assert!(d == new_year_2000);
        assert!(new_year_2000 == d);
        assert!(d < SolarDate::new(2000, 1, 2));
        assert!(SolarDate::new(1999, 12, 31) < d);
        assert_eq!(d - SolarDate::new(1999, 12, 1), 31);
        assert_eq!(d.to_solar(), new_year_2000);
    }

    #[test]
    fn with_fields() {
        let d = CsDate::new(1200, 7, 10).unwrap();
        assert_eq!(ymd(&d.with_day(11).unwrap()), (1200, 7, 11));
        assert_eq!(ymd(&d.with_month(9).unwrap()), (1200, 9, 10));
        assert_eq!(ymd(&d.with_year(1050).unwrap()), (1050, 7, 10));
        assert!(d.with_month(88).is_err());
        assert_eq!(ymd(&d.with_ymd(1201, 88, 3).unwrap()), (1201, 88, 3));
    }

    #[test]
    fn phase() {
        let d = CsDate::new(1200, 5, 19).unwrap();
        assert!(!d.is_waxing());
        assert_eq!(d.phase_day(), 4);
        let w = CsDate::new(1200, 7, 15).unwrap();
        assert!(w.is_waxing());
        assert_eq!(w.phase_day(), 15);
    }

    #[test]
    fn year_flags() {
        let b = CsDate::new(1200, 7, 1).unwrap();
        assert!(b.leap_day() && !b.leap_month() && b.solar_leap_year());
        assert_eq!(b.days_in_year(), 355);
        let c = CsDate::new(1201, 7, 1).unwrap();
        assert!(c.leap_month());
        assert_eq!(c.days_in_year(), 384);
    }
}
