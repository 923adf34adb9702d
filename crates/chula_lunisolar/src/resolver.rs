//! Year-type resolver.
//!
//! A single year's counters cannot always decide its type: an intercalary
//! day and an intercalary month may both be signalled, and the weekday of
//! new-year's day must follow on from the previous year. The resolver
//! settles this over a window of five consecutive years centred on the
//! target year, then locates the target year's new-year's day within the
//! first lunar months.

use tracing::{debug, trace};

use crate::epoch::YearEpoch;
use crate::year_type::{Provisional, YearType};

/// Days in the first lunar month (month 5, Caitra).
const FIRST_MONTH_DAYS: i64 = 29;

/// Smallest langsak that keeps new-year's day within month 5.
const FIRST_MONTH_LANGSAK: i64 = 6;

/// A lunisolar year with its type and new-year's day settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedYear {
    year: i64,
    horakhun: i64,
    kamma: i64,
    uccapon: i64,
    avoman: i64,
    masaken: i64,
    tithi: i64,
    weekday: u8,
    leap_day: bool,
    year_type: YearType,
    langsak: i64,
    nyd: u8,
    next_nyd: u8,
    offset: bool,
    offset_days: i64,
    new_year_month: u8,
}

impl ResolvedYear {
    /// Resolve `year` from freshly computed epochs of `year - 2 ..= year + 2`.
    pub fn for_year(year: i64) -> Self {
        let window: [YearEpoch; 5] = std::array::from_fn(|i| YearEpoch::new(year - 2 + i as i64));
        resolve_window(window)
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Horakhun of the solar year start.
    pub fn horakhun(&self) -> i64 {
        self.horakhun
    }

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

    pub fn tithi(&self) -> i64 {
        self.tithi
    }

    /// Weekday of the solar year start, Thai count (0 = Saturday).
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Whether the solar year carries a leap day.
    pub fn leap_day(&self) -> bool {
        self.leap_day
    }

    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Days in the lunisolar year (354, 355 or 384).
    pub fn caldays(&self) -> i64 {
        self.year_type.days()
    }

    /// Days in the solar year (365 or 366).
    pub fn solar_days(&self) -> i64 {
        365 + i64::from(self.leap_day)
    }

    /// Day offset of new-year's day from the lunar month epoch.
    pub fn langsak(&self) -> i64 {
        self.langsak
    }

    /// Weekday of new-year's day, Thai count.
    pub fn nyd(&self) -> u8 {
        self.nyd
    }

    /// Weekday of the next year's new-year's day, Thai count.
    pub fn next_nyd(&self) -> u8 {
        self.next_nyd
    }

    /// Whether the one-day sequencing correction was applied.
    pub fn offset(&self) -> bool {
        self.offset
    }

    /// Days from the first day of month 5 to new-year's day.
    pub fn offset_days(&self) -> i64 {
        self.offset_days
    }

    /// Lunar month of new-year's day: 5 (Caitra) or 6 (Vaisakha).
    pub fn new_year_month(&self) -> u8 {
        self.new_year_month
    }

    /// Day within `new_year_month` of new-year's day.
    pub fn new_year_day(&self) -> i64 {
        self.langsak
    }
}

/// Settle the type of `window[2]` using its two neighbours on each side.
///
/// `window` must hold five consecutive years in ascending order.
pub fn resolve_window(mut window: [YearEpoch; 5]) -> ResolvedYear {
    trace!(
        year = window[2].year,
        types = %window.iter().map(|e| e.cal_type.code()).collect::<String>(),
        "resolving"
    );
    propagate_leap_month(&mut window);
    reassign_leap_day(&mut window);
    correct_sequencing(&mut window);
    anchor(&window[2])
}

/// A tithi of 24 followed by 6 makes every year of the window a leap-month
/// year, each pushing the next new-year's day two weekdays further.
fn propagate_leap_month(window: &mut [YearEpoch; 5]) {
    if window[2].tithi != 24 || window[3].tithi != 6 {
        return;
    }
    debug!(year = window[2].year, "tithi 24/6 resonance, whole window becomes C");
    for e in window.iter_mut() {
        e.cal_type = Provisional::LeapMonth;
        e.next_nyd = (e.next_nyd + 2) % 7;
    }
}

/// An ambiguous year keeps its leap month and passes the leap day to the
/// neighbour that restores the weekday sequence.
fn reassign_leap_day(window: &mut [YearEpoch; 5]) {
    for i in 1..=3 {
        if window[i].cal_type != Provisional::Ambiguous {
            continue;
        }
        let j = if window[i].nyd == window[i - 1].next_nyd {
            i + 1
        } else {
            i - 1
        };
        debug!(
            year = window[i].year,
            to = window[j].year,
            "leap day moved off ambiguous year"
        );
        window[j].cal_type = Provisional::LeapDay;
        window[j].next_nyd = (window[j].next_nyd + 1) % 7;
    }
}

/// A year that agrees with neither neighbour's weekday starts one day later.
fn correct_sequencing(window: &mut [YearEpoch; 5]) {
    for i in 1..=3 {
        if window[i - 1].next_nyd == window[i].nyd || window[i].next_nyd == window[i + 1].nyd {
            continue;
        }
        debug!(year = window[i].year, "new-year's day offset by one");
        let e = &mut window[i];
        e.offset = true;
        e.langsak += 1;
        e.nyd = (e.nyd + 6) % 7;
        e.next_nyd = (e.next_nyd + 6) % 7;
    }
}

fn anchor(e: &YearEpoch) -> ResolvedYear {
    let (offset_days, new_year_month) =
        if e.langsak < FIRST_MONTH_LANGSAK + i64::from(e.offset) {
            (e.langsak + FIRST_MONTH_DAYS, 6)
        } else {
            (e.langsak, 5)
        };
    ResolvedYear {
        year: e.year,
        horakhun: e.horakhun,
        kamma: e.kamma,
        uccapon: e.uccapon,
        avoman: e.avoman,
        masaken: e.masaken,
        tithi: e.tithi,
        weekday: e.weekday,
        leap_day: e.leap_day,
        year_type: e.cal_type.finalize(),
        langsak: e.langsak,
        nyd: e.nyd,
        next_nyd: e.next_nyd,
        offset: e.offset,
        offset_days,
        new_year_month,
    }
}
