//! Day of the week.

/// Day of the week, in ISO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays in ISO order (index 0 = Monday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

const ENGLISH_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const THAI_NAMES: [&str; 7] = [
    "วันจันทร์",
    "วันอังคาร",
    "วันพุธ",
    "วันพฤหัส",
    "วันศุกร์",
    "วันเสาร์",
    "วันอาทิตย์",
];

impl Weekday {
    /// Weekday of a Julian Day Number (JDN 0 is a Monday).
    pub fn from_jdn(jdn: i64) -> Self {
        ALL_WEEKDAYS[jdn.rem_euclid(7) as usize]
    }

    /// Weekday from the Thai count where 0 = Saturday.
    pub fn from_cs_index(index: u8) -> Self {
        ALL_WEEKDAYS[(usize::from(index) + 5) % 7]
    }

    /// 0-based index, Monday = 0.
    pub const fn index(self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// ISO 8601 number, Monday = 1 .. Sunday = 7.
    pub const fn iso_number(self) -> u8 {
        self.index() + 1
    }

    /// Thai count used by the lunisolar calendar, Saturday = 0 .. Friday = 6.
    pub const fn cs_index(self) -> u8 {
        (self.index() + 2) % 7
    }

    /// English name.
    pub fn name(self) -> &'static str {
        ENGLISH_NAMES[self.index() as usize]
    }

    /// Thai name with the "วัน" prefix.
    pub fn thai_name(self) -> &'static str {
        THAI_NAMES[self.index() as usize]
    }
}
