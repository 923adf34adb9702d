//! Year epoch calculator.
//!
//! Computes, for one lunisolar year, the elapsed-day count of its solar year
//! start (horakhun) together with the traditional counters derived from it,
//! and a provisional year type read from that year alone. The provisional
//! type is settled by [`crate::resolver`], which looks at the neighbouring
//! years.
//!
//! Clean-room: arithmetic follows the published Chulasakarat
//! reckoning (Eade; Faraut), integer-only.

use std::fmt::{Display, Formatter};

use crate::constants::{
    APOGEE_ROTATION_DAYS, AVOMAN_UNITS, DAYS_IN_800_YEARS, EPOCH_OFFSET, TIME_UNITS_IN_1_DAY,
    UCCAPON_CONSTANT,
};
use crate::year_type::{Provisional, YearType};

/// Kammabucapon at or below which the solar year has a leap day.
const LEAP_DAY_KAMMA: i64 = 207;

/// Avoman thresholds that signal an intercalary lunar day.
const LEAP_DAY_AVOMAN_SOLAR_LEAP: i64 = 126;
const LEAP_DAY_AVOMAN_SOLAR_COMMON: i64 = 137;

/// Tithi window outside of which a leap month is signalled.
const LEAP_MONTH_TITHI_LOW: i64 = 6;
const LEAP_MONTH_TITHI_HIGH: i64 = 24;

fn kamma_span(year: i64) -> i64 {
    year * DAYS_IN_800_YEARS + EPOCH_OFFSET
}

/// Horakhun (elapsed days since the era epoch) of a year's solar start.
pub fn year_horakhun(year: i64) -> i64 {
    kamma_span(year).div_euclid(TIME_UNITS_IN_1_DAY) + 1
}

/// Moon-related counters evaluated on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCounters {
    /// Lunar apogee position, 0..3232.
    pub uccapon: i64,
    /// Lunar/solar excess in 1/692 lunar days, 1..=692.
    pub avoman: i64,
    /// Lunar months elapsed since the epoch.
    pub masaken: i64,
    /// Lunar day within the synodic month, 0..30.
    pub tithi: i64,
}

impl DayCounters {
    /// Counters on the day with the given horakhun.
    pub fn at(horakhun: i64) -> Self {
        let units = horakhun * 11 + 650;
        let avoman = match units.rem_euclid(AVOMAN_UNITS) {
            0 => AVOMAN_UNITS,
            r => r,
        };
        let lunar_days = units.div_euclid(AVOMAN_UNITS) + horakhun;
        Self {
            uccapon: (horakhun + UCCAPON_CONSTANT).rem_euclid(APOGEE_ROTATION_DAYS),
            avoman,
            masaken: lunar_days.div_euclid(30),
            tithi: lunar_days.rem_euclid(30),
        }
    }
}

/// The state of a lunisolar year at its solar year start.
///
/// Everything here is a pure function of the year number. The new-year
/// fields (`langsak`, `nyd`, `next_nyd`, `offset`) and the year type are
/// provisional until the year has been passed through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEpoch {
    pub(crate) year: i64,
    pub(crate) horakhun: i64,
    pub(crate) kamma: i64,
    pub(crate) uccapon: i64,
    pub(crate) avoman: i64,
    pub(crate) masaken: i64,
    pub(crate) tithi: i64,
    pub(crate) weekday: u8,
    pub(crate) leap_day: bool,
    pub(crate) cal_type: Provisional,
    pub(crate) langsak: i64,
    pub(crate) nyd: u8,
    pub(crate) next_nyd: u8,
    pub(crate) offset: bool,
}

impl YearEpoch {
    /// Compute the epoch state of `year`.
    pub fn new(year: i64) -> Self {
        let span = kamma_span(year);
        let horakhun = span.div_euclid(TIME_UNITS_IN_1_DAY) + 1;
        let kamma = TIME_UNITS_IN_1_DAY - span.rem_euclid(TIME_UNITS_IN_1_DAY);
        let counters = DayCounters::at(horakhun);
        let mut tithi = counters.tithi;
        if counters.avoman == AVOMAN_UNITS {
            tithi -= 1;
        }
        let weekday = horakhun.rem_euclid(7) as u8;
        let next_tithi = DayCounters::at(year_horakhun(year + 1)).tithi;
        let leap_day = kamma <= LEAP_DAY_KAMMA;

        let mut cal_type = Provisional::Ordinary;
        if tithi > LEAP_MONTH_TITHI_HIGH || tithi < LEAP_MONTH_TITHI_LOW {
            cal_type = Provisional::LeapMonth;
        }
        // a year-end tithi of 25 followed by 5 cancels the leap month
        if tithi == 25 && next_tithi == 5 {
            cal_type = Provisional::Ordinary;
        }
        let avoman_limit = if leap_day {
            LEAP_DAY_AVOMAN_SOLAR_LEAP
        } else {
            LEAP_DAY_AVOMAN_SOLAR_COMMON
        };
        if counters.avoman <= avoman_limit {
            cal_type = match cal_type {
                Provisional::LeapMonth => Provisional::Ambiguous,
                _ => Provisional::LeapDay,
            };
        }

        let langsak = tithi.max(1);
        let days_back = if langsak < 6 { langsak + 29 } else { langsak };
        let nyd = (i64::from(weekday) - days_back + 36).rem_euclid(7) as u8;
        let next_nyd = (nyd + cal_type.weekday_advance()) % 7;

        Self {
            year,
            horakhun,
            kamma,
            uccapon: counters.uccapon,
            avoman: counters.avoman,
            masaken: counters.masaken,
            tithi,
            weekday,
            leap_day,
            cal_type,
            langsak,
            nyd,
            next_nyd,
            offset: false,
        }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Elapsed days from the era epoch to the solar year start.
    pub fn horakhun(&self) -> i64 {
        self.horakhun
    }

    /// Kammabucapon, the excess-day remainder (1..=800).
    pub fn kamma(&self) -> i64 {
        self.kamma
    }

    pub fn uccapon(&self) -> i64 {
        self.uccapon
    }

    pub fn avoman(&self) -> i64 {
        self.avoman
    }

    pub fn masaken(&self) -> i64 {
        self.masaken
    }

    /// Tithi at the year start, with the avoman == 692 boundary correction.
    pub fn tithi(&self) -> i64 {
        self.tithi
    }

    /// Weekday of the solar year start, Thai count (0 = Saturday).
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Whether the solar year carries a leap day (kamma <= 207).
    pub fn leap_day(&self) -> bool {
        self.leap_day
    }

    pub fn langsak(&self) -> i64 {
        self.langsak
    }

    /// Weekday of new-year's day, Thai count.
    pub fn nyd(&self) -> u8 {
        self.nyd
    }

    /// Weekday of the following year's new-year's day, Thai count.
    pub fn next_nyd(&self) -> u8 {
        self.next_nyd
    }

    pub fn offset(&self) -> bool {
        self.offset
    }

    /// Whether the single-year rules signalled both a leap day and a leap month.
    pub fn is_ambiguous(&self) -> bool {
        self.cal_type == Provisional::Ambiguous
    }

    /// Year type as read from this year alone.
    ///
    /// An ambiguous year reads as a leap-month year here; the resolver may
    /// still hand its leap day to a neighbour or change a neighbour's type.
    pub fn provisional_type(&self) -> YearType {
        self.cal_type.finalize()
    }

    /// Days in the solar year (365 or 366).
    pub fn solar_days(&self) -> i64 {
        365 + i64::from(self.leap_day)
    }
}

impl Display for YearEpoch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "horakhun:{} kamma:{} ucca:{} avoman:{} mas:{} tithi:{} day:{} nyd:{} next_nyd:{} \
             langsak:{} bissext:{} offset:{} cal:{}",
            self.horakhun,
            self.kamma,
            self.uccapon,
            self.avoman,
            self.masaken,
            self.tithi,
            self.weekday,
            self.nyd,
            self.next_nyd,
            self.langsak,
            u8::from(self.leap_day),
            u8::from(self.offset),
            self.cal_type.code()
        )
    }
}
