//! Text rendering of the layout board with a date's cells highlighted.

use chula_base::{digits_to_thai, thai_string_width};

use crate::date::PakDate;
use crate::layout::{FORTNIGHT_DAYS, ROW_NAMES, ROWS, Size, line};

const HIGHLIGHT_ON: &str = "\x1b[;7m";
const HIGHLIGHT_OFF: &str = "\x1b[0;0m";

/// Columns in the header: the longest board line.
const COLUMNS: u8 = 18;

struct Row {
    label: String,
    cells: Vec<String>,
    selected: Vec<bool>,
}

impl Row {
    fn new(label: String, cells: Vec<String>) -> Self {
        let selected = vec![false; cells.len()];
        Self {
            label,
            cells,
            selected,
        }
    }
}

fn flag_cells(flags: &[u8]) -> Vec<String> {
    flags
        .iter()
        .map(|&f| (if f == 1 { "ม" } else { "จ" }).to_string())
        .collect()
}

fn number_cells(count: u8) -> Vec<String> {
    (1..=count).map(|n| digits_to_thai(&n.to_string())).collect()
}

fn rows() -> Vec<Row> {
    let mut rows = vec![Row::new(ROW_NAMES[0].to_string(), flag_cells(line(0, 0)))];
    for row in 1..ROWS {
        for size in [Size::Long, Size::Short] {
            rows.push(Row::new(
                format!("{}{}", size.prefix(), ROW_NAMES[row]),
                flag_cells(line(row, size.line())),
            ));
        }
    }
    for size in [Size::Long, Size::Short] {
        rows.push(Row::new(
            format!("{}{}", size.prefix(), ROW_NAMES[ROWS]),
            number_cells(FORTNIGHT_DAYS[size.line()]),
        ));
    }
    rows
}

/// Render the layout board, one line per board line, with the cells of
/// `date` in reverse video and a footer of its cycle, horakhun and
/// fortnight count.
pub fn board(date: &PakDate) -> String {
    let mut rows = rows();
    for (row, col) in date.board_cells() {
        if let Some(flag) = rows.get_mut(row).and_then(|r| r.selected.get_mut(col)) {
            *flag = true;
        }
    }

    let width = rows
        .iter()
        .map(|r| thai_string_width(&r.label))
        .max()
        .unwrap_or(0);
    let blank = " ".repeat(width.saturating_sub(1));

    let header: Vec<String> = (1..=COLUMNS).map(|n| format!("{n:>2}")).collect();
    let mut out = format!("{blank}  {}\n", digits_to_thai(&header.join(" ")));
    for r in &rows {
        let pad = " ".repeat(width - thai_string_width(&r.label));
        let cells: Vec<String> = r
            .cells
            .iter()
            .zip(&r.selected)
            .map(|(c, &on)| {
                if on {
                    format!("{HIGHLIGHT_ON}{c:>2}{HIGHLIGHT_OFF}")
                } else {
                    format!("{c:>2}")
                }
            })
            .collect();
        out.push_str(&format!("{}{pad} {}\n", r.label, cells.join(" ")));
    }
    out.push_str(&digits_to_thai(&format!(
        "{blank}   รอบที่ {}   หรคุณปักขคณนา {}   ปักขเกณฑ์ {}\n",
        date.cycle(),
        date.horakhun(),
        date.pakkhagen()
    )));
    out
}

impl PakDate {
    /// See [`board`].
    pub fn board(&self) -> String {
        board(self)
    }
}
