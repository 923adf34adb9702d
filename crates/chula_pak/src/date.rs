//! Pak dates.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Sub;
use std::str::FromStr;

use chula_base::{JulianDay, MAX_SOLAR_JDN, SolarDate, Weekday, digits_to_thai, timestamp_to_jdn, today_jdn};
use tracing::{debug, trace};

use crate::error::PakError;
use crate::layout::{DIVISORS, FORTNIGHT_DAYS, FORTNIGHTS, ROW_NAMES, ROWS, Size, cell};

/// Julian Day Number of the day before the Pak epoch (1736-01-28 is day 1).
pub const PAK_JULIAN_DAY_OFFSET: i64 = 2_355_147;

/// Days in one full Pak cycle.
pub const PAK_DAYS_IN_CYCLE: i64 = 289_577;

/// Fortnights in one full Pak cycle.
pub const PAK_FORTNIGHTS_IN_CYCLE: i64 = 19_612;

/// Letters standing for the digits 1..9 and 0 on short rows.
const SHORT_DIGITS: [char; 10] = ['ก', 'ข', 'ฅ', 'จ', 'ห', 'ฉ', 'ษ', 'ฐ', 'ฬ', 'ฮ'];

/// 1-based quotient and remainder: the remainder is in `1..=b`.
fn split(a: i64, b: i64) -> (i64, i64) {
    let c = (a - 1).div_euclid(b);
    (c + 1, a - c * b)
}

/// A day of the Pakkhakhananaa calendar.
///
/// The day is written as a cycle and six row values,
/// `cycle-a:b:c:d:e:f`, where `f` is the day within the fortnight.
#[derive(Debug, Clone, Copy)]
pub struct PakDate {
    jdn: i64,
    horakhun: i64,
    cycle: i64,
    values: [i64; ROWS + 1],
    /// Unit size of each row; the last entry is the fortnight's.
    sizes: [Size; ROWS + 1],
}

impl PakDate {
    /// Pak date of a Julian Day Number.
    pub fn from_julian_day(jdn: i64) -> Result<Self, PakError> {
        if jdn > MAX_SOLAR_JDN {
            return Err(PakError::OutOfRange(jdn));
        }
        let horakhun = jdn
            .checked_sub(PAK_JULIAN_DAY_OFFSET)
            .ok_or(PakError::OutOfRange(jdn))?;
        if horakhun <= 0 {
            return Err(PakError::EpochRange { jdn });
        }
        let days = match horakhun.rem_euclid(PAK_DAYS_IN_CYCLE) {
            0 => PAK_DAYS_IN_CYCLE,
            d => d,
        };
        let cycle = (horakhun - days) / PAK_DAYS_IN_CYCLE + 1;

        let mut values = [0i64; ROWS + 1];
        let mut sizes = [Size::Long; ROWS + 1];
        let (top, mut rem) = split(days, DIVISORS[0]);
        values[0] = top;
        let mut size = cell(0, 0, top).ok_or(PakError::Layout { row: 0, value: top })?;
        for row in 1..ROWS {
            sizes[row] = size;
            let (mut value, r) = split(rem, DIVISORS[row]);
            rem = r;
            let next = match cell(row, size.line(), value) {
                Some(next) => next,
                None => {
                    // one unit too far for this line: step back and carry
                    // the unit's days into the rows below
                    debug!(row, value, "row value past board line");
                    value -= 1;
                    rem += DIVISORS[row];
                    cell(row, size.line(), value).ok_or(PakError::Layout { row, value })?
                }
            };
            values[row] = value;
            size = next;
        }
        sizes[ROWS] = size;
        values[ROWS] = rem;
        if rem > i64::from(FORTNIGHT_DAYS[size.line()]) {
            return Err(PakError::Layout {
                row: ROWS,
                value: rem,
            });
        }
        trace!(jdn, cycle, ?values, "pak date");
        Ok(Self {
            jdn,
            horakhun,
            cycle,
            values,
            sizes,
        })
    }

    /// Pak date of a code `cycle-a:b:c:d:e:f`.
    ///
    /// Row values past their normal range carry into the larger rows, so
    /// the date's own [`code`](Self::code) may differ from the input.
    pub fn from_code(code: &str) -> Result<Self, PakError> {
        let bad = |what: &str| PakError::Parse(format!("{what} in {code:?}"));
        let (cycle, rest) = code
            .trim()
            .split_once('-')
            .ok_or_else(|| bad("missing cycle"))?;
        let cycle: i64 = cycle.parse().map_err(|_| bad("bad cycle"))?;
        let fields = rest
            .split(':')
            .map(|f| f.parse::<i64>().map_err(|_| bad("bad field")))
            .collect::<Result<Vec<_>, _>>()?;
        let [a, b, c, d, e, f] = fields.as_slice() else {
            return Err(bad("expected six fields"));
        };
        if cycle < 1 || [a, b, c, d, e, f].iter().any(|&&v| v < 1) {
            return Err(bad("fields start at 1"));
        }

        let mut horakhun = *f;
        for (value, divisor) in [a, b, c, d, e].into_iter().zip(DIVISORS) {
            horakhun = (value - 1)
                .checked_mul(divisor)
                .and_then(|days| days.checked_add(horakhun))
                .ok_or_else(|| bad("value too large"))?;
        }
        let jdn = (cycle - 1)
            .checked_mul(PAK_DAYS_IN_CYCLE)
            .and_then(|days| days.checked_add(horakhun))
            .and_then(|days| days.checked_add(PAK_JULIAN_DAY_OFFSET))
            .ok_or_else(|| bad("value too large"))?;
        Self::from_julian_day(jdn)
    }

    pub fn from_solar(date: &SolarDate) -> Result<Self, PakError> {
        Self::from_julian_day(date.julian_day())
    }

    /// Pak date of the UTC day containing a UNIX timestamp.
    pub fn from_timestamp(unix_seconds: i64) -> Result<Self, PakError> {
        Self::from_julian_day(timestamp_to_jdn(unix_seconds))
    }

    /// Today's Pak date (UTC).
    pub fn today() -> Result<Self, PakError> {
        Self::from_julian_day(today_jdn())
    }

    pub fn to_julian_day(&self) -> i64 {
        self.jdn
    }

    pub fn to_solar(&self) -> SolarDate {
        SolarDate::from_jdn(self.jdn)
    }

    /// Days since the Pak epoch; the epoch day is 1.
    pub fn horakhun(&self) -> i64 {
        self.horakhun
    }

    /// 1-based cycle number.
    pub fn cycle(&self) -> i64 {
        self.cycle
    }

    /// Row values `a..=f`.
    pub fn values(&self) -> [i64; ROWS + 1] {
        self.values
    }

    /// Unit size of row `row` (0..=5). Row 5 is the fortnight.
    pub fn size(&self, row: usize) -> Option<Size> {
        self.sizes.get(row).copied()
    }

    /// Day within the fortnight.
    pub fn day(&self) -> i64 {
        self.values[ROWS]
    }

    /// Whether the fortnight is long (15 days).
    pub fn is_full_fortnight(&self) -> bool {
        self.sizes[ROWS] == Size::Long
    }

    /// Fortnights since the epoch (ปักขเกณฑ์).
    pub fn pakkhagen(&self) -> i64 {
        let rows: i64 = self.values[..ROWS - 1]
            .iter()
            .zip(FORTNIGHTS)
            .map(|(v, n)| (v - 1) * n)
            .sum();
        (self.cycle - 1) * PAK_FORTNIGHTS_IN_CYCLE + rows + self.values[ROWS - 1]
    }

    /// Waxing fortnights have an even count.
    pub fn is_waxing(&self) -> bool {
        self.pakkhagen() % 2 == 0
    }

    pub fn is_waning(&self) -> bool {
        !self.is_waxing()
    }

    /// Code `cycle-a:b:c:d:e:f`.
    pub fn code(&self) -> String {
        let [a, b, c, d, e, f] = self.values;
        format!("{}-{a}:{b}:{c}:{d}:{e}:{f}", self.cycle)
    }

    /// Two-line abbreviation. Each of the first five rows gives one column,
    /// Thai digits on long rows and letters on short ones; two-digit values
    /// continue on the second line.
    pub fn abbreviation(&self) -> String {
        let mut first = String::new();
        let mut second = String::new();
        for (row, &value) in self.values[..ROWS].iter().enumerate() {
            let long = self.sizes[row + 1] == Size::Long;
            let glyph = |d: i64| {
                if long {
                    digits_to_thai(&d.to_string())
                } else {
                    SHORT_DIGITS[((d + 9) % 10) as usize].to_string()
                }
            };
            if value > 9 {
                first.push_str(&glyph(value / 10));
                second.push_str(&glyph(value % 10));
            } else {
                first.push_str(&glyph(value));
                second.push(' ');
            }
        }
        format!("{first}\n{second}").trim_end().to_string()
    }

    /// Board position `(row, column)` of each of the six values, rows
    /// numbered as in [`board`](crate::board::board).
    pub fn board_cells(&self) -> [(usize, usize); ROWS + 1] {
        std::array::from_fn(|i| {
            let row = if i == 0 {
                0
            } else {
                2 * i - 1 + self.sizes[i].line()
            };
            (row, (self.values[i] - 1) as usize)
        })
    }

    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_jdn(self.jdn)
    }

    /// Weekday with Monday = 0 .. Sunday = 6.
    pub fn weekday(&self) -> u8 {
        self.day_of_week().index()
    }

    /// ISO weekday, Monday = 1 .. Sunday = 7.
    pub fn iso_weekday(&self) -> u8 {
        self.day_of_week().iso_number()
    }

    /// The Pak date `n` days later.
    pub fn add_days(&self, n: i64) -> Result<Self, PakError> {
        let jdn = self.jdn.checked_add(n).ok_or(PakError::OutOfRange(self.jdn))?;
        Self::from_julian_day(jdn)
    }

    /// The Pak date `n` days earlier.
    pub fn subtract_days(&self, n: i64) -> Result<Self, PakError> {
        let jdn = self.jdn.checked_sub(n).ok_or(PakError::OutOfRange(self.jdn))?;
        Self::from_julian_day(jdn)
    }

    /// Compare by day with any other calendar date.
    pub fn cmp_day<T: JulianDay + ?Sized>(&self, other: &T) -> Ordering {
        self.jdn.cmp(&other.julian_day())
    }
}

impl Display for PakDate {
    /// Long Thai form, e.g.
    /// `มหาสัมพยุหะ ๑ จุลพยุหะ ๑ มหาสมุหะ ๑ จุลวรรค ๑ มหาปักข์ ๑ แรม ๑ ค่ำ (ปักข์ถ้วน)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::with_capacity(2 * ROWS + 4);
        for row in 0..ROWS {
            parts.push(format!(
                "{}{}",
                self.sizes[row + 1].prefix(),
                ROW_NAMES[row + 1]
            ));
            parts.push(self.values[row].to_string());
        }
        parts.push(if self.is_waxing() { "ขึ้น" } else { "แรม" }.to_string());
        parts.push(self.day().to_string());
        parts.push("ค่ำ".to_string());
        parts.push(
            if self.is_full_fortnight() {
                "(ปักข์ถ้วน)"
            } else {
                "(ปักข์ขาด)"
            }
            .to_string(),
        );
        f.write_str(&digits_to_thai(&parts.join(" ")))
    }
}

impl FromStr for PakDate {
    type Err = PakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl JulianDay for PakDate {
    fn julian_day(&self) -> i64 {
        self.jdn
    }
}

impl PartialEq for PakDate {
    fn eq(&self, other: &Self) -> bool {
        self.jdn == other.jdn
    }
}

impl Eq for PakDate {}

impl Hash for PakDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.jdn.hash(state);
    }
}

impl PartialOrd for PakDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PakDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.jdn.cmp(&other.jdn)
    }
}

impl PartialEq<SolarDate> for PakDate {
    fn eq(&self, other: &SolarDate) -> bool {
        self.jdn == other.julian_day()
    }
}

impl PartialOrd<SolarDate> for PakDate {
    fn partial_cmp(&self, other: &SolarDate) -> Option<Ordering> {
        Some(self.cmp_day(other))
    }
}

impl Sub for PakDate {
    type Output = i64;

    fn sub(self, rhs: PakDate) -> i64 {
        self.jdn - rhs.jdn
    }
}
