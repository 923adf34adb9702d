//! Text forms of a [`CsDate`].
//!
//! Two forms are supported:
//! - the Thai form, `วันศุกร์ เดือน ๕ แรม ๔ ค่ำ ปีจอ จ.ศ.๑๒๐๐`, with Thai digits;
//! - the numeric form `YYYY-MM-DD`, where `MM` is the written month number
//!   (88 for the intercalary month).
//!
//! Both forms carry the written month number only. Past the end of the
//! lunar year (`day_of_year >= days_in_year`) a trailing month 5 or 6 day
//! reads back as the same day of the first month.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chula_base::{digits_to_arabic, digits_to_thai};

use crate::config::CalendarConfig;
use crate::date::CsDate;
use crate::error::CalendarError;
use crate::month::Month;

const MONTH_WORD: &str = "เดือน";
const DAY_WORD: &str = "ค่ำ";
const ERA_PREFIX: &str = "จ.ศ.";
const WAXING: &str = "ขึ้น";
const WANING: &str = "แรม";

/// Tokens in the Thai form.
const THAI_TOKENS: usize = 8;

/// Render the Thai form of `date`.
pub fn format_thai(date: &CsDate, config: &CalendarConfig) -> String {
    let phase = if date.is_waxing() { WAXING } else { WANING };
    let s = format!(
        "{} {MONTH_WORD} {} {phase} {} {DAY_WORD} {} {ERA_PREFIX}{}",
        date.day_of_week().thai_name(),
        config.month_style.label(date.lunar_month()),
        date.phase_day(),
        date.naksatr().year_label(),
        date.year(),
    );
    digits_to_thai(&s)
}

/// Render `YYYY-MM-DD`.
pub fn format_ymd(date: &CsDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

fn parse_err(s: &str, what: &str) -> CalendarError {
    CalendarError::Parse(format!("{what} in {s:?}"))
}

/// Parse the Thai form. Thai or Arabic digits are both accepted; the
/// weekday and year animal are not checked against the date.
pub fn parse_thai(s: &str, config: &CalendarConfig) -> Result<CsDate, CalendarError> {
    let text = digits_to_arabic(s);
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != THAI_TOKENS {
        return Err(parse_err(
            s,
            &format!("expected {THAI_TOKENS} fields, found {}", tokens.len()),
        ));
    }
    if tokens[1] != MONTH_WORD || tokens[5] != DAY_WORD {
        return Err(parse_err(s, "missing month or day word"));
    }
    let month = config
        .month_style
        .parse_label(tokens[2])
        .ok_or_else(|| parse_err(s, "bad month"))?;
    let offset = match tokens[3] {
        WAXING => 0,
        WANING => 15,
        _ => return Err(parse_err(s, "bad moon phase")),
    };
    let day: u8 = tokens[4].parse().map_err(|_| parse_err(s, "bad day"))?;
    if !(1..=15).contains(&day) {
        return Err(parse_err(s, "day outside 1..=15"));
    }
    let year: i64 = tokens[7]
        .strip_prefix(ERA_PREFIX)
        .ok_or_else(|| parse_err(s, "missing era prefix"))?
        .parse()
        .map_err(|_| parse_err(s, "bad year"))?;
    CsDate::from_month(year, month, day + offset)
}

/// Parse `YYYY-MM-DD`. The year may be space-padded.
pub fn parse_ymd(s: &str) -> Result<CsDate, CalendarError> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(parse_err(s, "expected YYYY-MM-DD"));
    };
    let year: i64 = year.trim().parse().map_err(|_| parse_err(s, "bad year"))?;
    let raw: u8 = month.parse().map_err(|_| parse_err(s, "bad month"))?;
    let day: u8 = day.parse().map_err(|_| parse_err(s, "bad day"))?;
    let month = Month::from_raw(raw).ok_or(CalendarError::InvalidMonth { year, month: raw })?;
    CsDate::from_month(year, month, day)
}

impl CsDate {
    /// Thai form under the given display configuration.
    pub fn format_with(&self, config: &CalendarConfig) -> String {
        format_thai(self, config)
    }

    /// Numeric `YYYY-MM-DD` form.
    pub fn to_ymd_string(&self) -> String {
        format_ymd(self)
    }
}

impl Display for CsDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_thai(self, &CalendarConfig::default()))
    }
}

impl FromStr for CsDate {
    type Err = CalendarError;

    /// Accepts the Thai form (default month style) or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(ERA_PREFIX) {
            parse_thai(s, &CalendarConfig::default())
        } else {
            parse_ymd(s)
        }
    }
}
