//! The Pakkhakhananaa layout board.
//!
//! Days within a cycle are counted in a mixed radix of five rows. Each row
//! value is either long (มหา) or short (จุล), and that flag decides the size
//! of the next row's unit: a long unit reads the next row from the long line
//! of the board, a short one from the short line.

/// Size of a row unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    /// มหา
    Long,
    /// จุล
    Short,
}

impl Size {
    fn from_flag(flag: u8) -> Self {
        if flag == 1 { Self::Long } else { Self::Short }
    }

    /// Board line holding units of this size.
    pub const fn line(self) -> usize {
        match self {
            Self::Long => 0,
            Self::Short => 1,
        }
    }

    /// Thai prefix, "มหา" or "จุล".
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Long => "มหา",
            Self::Short => "จุล",
        }
    }
}

/// Rows of the count, from the largest unit down.
pub const ROWS: usize = 5;

/// Days in one unit of each row. The last row's unit is the fortnight.
pub const DIVISORS: [i64; ROWS] = [16_168, 1_447, 251, 59, 15];

/// Fortnights in one unit of each row.
pub const FORTNIGHTS: [i64; ROWS] = [1_095, 98, 17, 4, 1];

/// Row names; index 5 is the fortnight itself.
pub const ROW_NAMES: [&str; ROWS + 1] = ["ปักขคณนา", "สัมพยุหะ", "พยุหะ", "สมุหะ", "วรรค", "ปักข์"];

/// Days in a long and a short fortnight.
pub const FORTNIGHT_DAYS: [u8; 2] = [15, 14];

/// Board lines per row, long line first. 1 marks a long value.
const BOARD: [&[&[u8]]; ROWS] = [
    &[&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0]],
    &[&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1]],
    &[&[1, 1, 1, 1, 1, 1, 0], &[1, 1, 1, 1, 1, 0]],
    &[&[0, 0, 0, 1], &[0, 0, 1]],
    &[&[1, 1, 1, 1, 0], &[1, 1, 1, 0]],
];

/// Size of the 1-based `value` on `line` of `row`, or `None` if the line is
/// shorter than `value`.
pub fn cell(row: usize, line: usize, value: i64) -> Option<Size> {
    let index = usize::try_from(value.checked_sub(1)?).ok()?;
    BOARD
        .get(row)?
        .get(line)?
        .get(index)
        .map(|&flag| Size::from_flag(flag))
}

/// All cells of one board line.
pub fn line(row: usize, line: usize) -> &'static [u8] {
    BOARD
        .get(row)
        .and_then(|lines| lines.get(line))
        .copied()
        .unwrap_or(&[])
}

/// Number of lines of `row`: 1 for the top row, 2 below it.
pub fn lines(row: usize) -> usize {
    BOARD.get(row).map_or(0, |lines| lines.len())
}
