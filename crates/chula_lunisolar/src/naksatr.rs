//! Year animal (naksatr) of the 12-year cycle.

/// The twelve year animals, starting from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Naksatr {
    Chuat,
    Chalu,
    Khan,
    Thox,
    Marong,
    Maseng,
    Mamia,
    Mamae,
    Wok,
    Rakha,
    Cho,
    Kun,
}

/// All 12 animals in order (index 0 = Chuat, the Rat).
pub const ALL_NAKSATR: [Naksatr; 12] = [
    Naksatr::Chuat,
    Naksatr::Chalu,
    Naksatr::Khan,
    Naksatr::Thox,
    Naksatr::Marong,
    Naksatr::Maseng,
    Naksatr::Mamia,
    Naksatr::Mamae,
    Naksatr::Wok,
    Naksatr::Rakha,
    Naksatr::Cho,
    Naksatr::Kun,
];

const THAI_NAMES: [&str; 12] = [
    "ชวด", "ฉลู", "ขาล", "เถาะ", "มะโรง", "มะเส็ง", "มะเมีย", "มะแม", "วอก", "ระกา", "จอ", "กุน",
];

const ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Naksatr {
    /// Animal of a Chulasakarat year (CS 2 is a Rat year).
    pub fn from_cs_year(year: i64) -> Self {
        ALL_NAKSATR[(year + 10).rem_euclid(12) as usize]
    }

    /// 0-based index (Chuat=0 .. Kun=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Chuat => 0,
            Self::Chalu => 1,
            Self::Khan => 2,
            Self::Thox => 3,
            Self::Marong => 4,
            Self::Maseng => 5,
            Self::Mamia => 6,
            Self::Mamae => 7,
            Self::Wok => 8,
            Self::Rakha => 9,
            Self::Cho => 10,
            Self::Kun => 11,
        }
    }

    /// Thai name without the "ปี" prefix.
    pub fn thai_name(self) -> &'static str {
        THAI_NAMES[self.index() as usize]
    }

    /// Thai year label, e.g. "ปีจอ".
    pub fn year_label(self) -> String {
        format!("ปี{}", self.thai_name())
    }

    /// English animal name.
    pub fn animal(self) -> &'static str {
        ANIMALS[self.index() as usize]
    }
}
