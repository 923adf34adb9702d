//! Year classification.

use std::fmt::{Display, Formatter};

/// Final classification of a lunisolar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    /// Ordinary year of 354 days (type A).
    Ordinary,
    /// Year with an intercalary day, 355 days (type B).
    LeapDay,
    /// Year with an intercalary month, 384 days (type C).
    LeapMonth,
}

impl YearType {
    /// Number of days in a year of this type.
    pub const fn days(self) -> i64 {
        match self {
            Self::Ordinary => 354,
            Self::LeapDay => 355,
            Self::LeapMonth => 384,
        }
    }

    /// Traditional single-letter code.
    pub const fn code(self) -> char {
        match self {
            Self::Ordinary => 'A',
            Self::LeapDay => 'B',
            Self::LeapMonth => 'C',
        }
    }
}

impl Display for YearType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classification of a single year before the neighbouring years are
/// consulted. Only the resolver sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Provisional {
    Ordinary,
    LeapDay,
    LeapMonth,
    /// Both an intercalary day and an intercalary month were signalled.
    /// One neighbour takes the day instead.
    Ambiguous,
}

impl Provisional {
    /// Weekday advance from this year's new-year's day to the next.
    pub(crate) const fn weekday_advance(self) -> u8 {
        match self {
            Self::Ordinary => 4,
            Self::LeapDay => 5,
            Self::LeapMonth | Self::Ambiguous => 6,
        }
    }

    pub(crate) const fn code(self) -> char {
        match self {
            Self::Ordinary => 'A',
            Self::LeapDay => 'B',
            Self::LeapMonth => 'C',
            Self::Ambiguous => 'c',
        }
    }

    pub(crate) const fn finalize(self) -> YearType {
        match self {
            Self::Ordinary => YearType::Ordinary,
            Self::LeapDay => YearType::LeapDay,
            Self::LeapMonth | Self::Ambiguous => YearType::LeapMonth,
        }
    }
}
