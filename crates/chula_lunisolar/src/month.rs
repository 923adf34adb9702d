//! Lunar months and the per-year-type month tables.
//!
//! A Chulasakarat year runs from month 5 round to month 4 and, because it is
//! counted from a solar new year, may end in a second month 5 or 6. A
//! leap-month year repeats month 8; the repeat is the intercalary "8/8".

use std::fmt::{Display, Formatter};

use crate::year_type::YearType;

/// Whether a month is the first or the repeated occurrence of its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    First,
    Second,
}

/// A lunar month within a year.
///
/// The second month 8 is the intercalary month (raw code 88); second months
/// 5 and 6 are the trailing months after month 4 (raw codes 15 and 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    number: u8,
    occurrence: Occurrence,
}

impl Month {
    /// The intercalary second month 8.
    pub const INTERCALARY: Month = Month::second(8);

    const fn first(number: u8) -> Self {
        Self {
            number,
            occurrence: Occurrence::First,
        }
    }

    const fn second(number: u8) -> Self {
        Self {
            number,
            occurrence: Occurrence::Second,
        }
    }

    /// Month 5 or 6 repeated after month 4.
    pub(crate) const fn trailing(number: u8) -> Self {
        Self::second(number)
    }

    /// Build a month; only months 5, 6 and 8 have a second occurrence.
    pub fn new(number: u8, occurrence: Occurrence) -> Option<Self> {
        match (number, occurrence) {
            (1..=12, Occurrence::First) => Some(Self::first(number)),
            (5 | 6 | 8, Occurrence::Second) => Some(Self::second(number)),
            _ => None,
        }
    }

    /// Decode the integer month code: 1..=12, 88, 15 or 16.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1..=12 => Some(Self::first(raw)),
            88 => Some(Self::INTERCALARY),
            15 | 16 => Some(Self::second(raw - 10)),
            _ => None,
        }
    }

    /// Integer month code, distinguishing every occurrence.
    pub const fn raw(self) -> u8 {
        match (self.number, self.occurrence) {
            (8, Occurrence::Second) => 88,
            (n, Occurrence::Second) => n + 10,
            (n, Occurrence::First) => n,
        }
    }

    /// Month number as written: 1..=12, or 88 for the intercalary month.
    pub const fn logical(self) -> u8 {
        if self.is_intercalary() {
            88
        } else {
            self.number
        }
    }

    /// Month number 1..=12 (8 for the intercalary month).
    pub const fn number(self) -> u8 {
        self.number
    }

    pub const fn occurrence(self) -> Occurrence {
        self.occurrence
    }

    pub const fn is_intercalary(self) -> bool {
        self.number == 8 && matches!(self.occurrence, Occurrence::Second)
    }

    /// Whether this is a month 5 or 6 repeated after month 4.
    pub const fn is_trailing(self) -> bool {
        self.number != 8 && matches!(self.occurrence, Occurrence::Second)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.logical())
    }
}

const REGULAR_ORDER: [Month; 14] = [
    Month::first(5),
    Month::first(6),
    Month::first(7),
    Month::first(8),
    Month::first(9),
    Month::first(10),
    Month::first(11),
    Month::first(12),
    Month::first(1),
    Month::first(2),
    Month::first(3),
    Month::first(4),
    Month::second(5),
    Month::second(6),
];

const LEAP_MONTH_ORDER: [Month; 14] = [
    Month::first(5),
    Month::first(6),
    Month::first(7),
    Month::first(8),
    Month::INTERCALARY,
    Month::first(9),
    Month::first(10),
    Month::first(11),
    Month::first(12),
    Month::first(1),
    Month::first(2),
    Month::first(3),
    Month::first(4),
    Month::second(5),
];

/// Days from the first of month 5 to the first of each month in order.
const ORDINARY_CUMULATIVE: [i64; 14] = [
    0, 29, 59, 88, 118, 147, 177, 206, 236, 265, 295, 324, 354, 383,
];
const LEAP_DAY_CUMULATIVE: [i64; 14] = [
    0, 29, 59, 89, 119, 148, 178, 207, 237, 266, 296, 325, 355, 384,
];
const LEAP_MONTH_CUMULATIVE: [i64; 14] = [
    0, 29, 59, 88, 118, 148, 177, 207, 236, 266, 295, 325, 354, 384,
];

/// Longest month; bounds the day of the last month in the table.
const MAX_MONTH_DAYS: i64 = 30;

fn tables(year_type: YearType) -> (&'static [Month; 14], &'static [i64; 14]) {
    match year_type {
        YearType::Ordinary => (&REGULAR_ORDER, &ORDINARY_CUMULATIVE),
        YearType::LeapDay => (&REGULAR_ORDER, &LEAP_DAY_CUMULATIVE),
        YearType::LeapMonth => (&LEAP_MONTH_ORDER, &LEAP_MONTH_CUMULATIVE),
    }
}

/// Months of a year type in calendar order, from month 5.
pub fn months_in_order(year_type: YearType) -> &'static [Month] {
    tables(year_type).0
}

/// Days from the first of month 5 to the first of `month`, and the length
/// of `month`. `None` if the month has no place in this year type.
pub fn month_span(year_type: YearType, month: Month) -> Option<(i64, i64)> {
    let (order, cumulative) = tables(year_type);
    let pos = order.iter().position(|&m| m == month)?;
    let start = cumulative[pos];
    let len = cumulative
        .get(pos + 1)
        .map_or(MAX_MONTH_DAYS, |next| next - start);
    Some((start, len))
}

/// Month and 1-based day of the `days`-th day counted from the day before
/// month 5 begins.
///
/// Breakpoints are scanned from the largest down; the first one strictly
/// below `days` names the month.
pub fn locate(year_type: YearType, days: i64) -> (Month, i64) {
    let (order, cumulative) = tables(year_type);
    for (month, start) in order.iter().zip(cumulative).rev() {
        if days > *start {
            return (*month, days - start);
        }
    }
    (order[0], days)
}
