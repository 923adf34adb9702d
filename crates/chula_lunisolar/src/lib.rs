//! Thai lunisolar (Chulasakarat) calendar conversion.
//!
//! This crate provides:
//! - Year epoch counters (horakhun, kammabucapon, uccapon, avoman, masaken, tithi)
//! - Year-type resolution over a five-year window (ordinary, leap-day, leap-month)
//! - `CsDate` conversion to and from Julian Day Numbers and solar dates
//! - Thai and `YYYY-MM-DD` text forms, with regional month numbering
//!
//! All arithmetic is integer-only and reproducible bit for bit. The earliest
//! supported day is horakhun 1 (JDN 1954168, 638-03-22 Julian).

pub mod config;
pub mod constants;
pub mod date;
pub mod epoch;
pub mod error;
pub mod fmt;
pub mod month;
pub mod naksatr;
pub mod resolver;
pub mod year_type;

pub use config::{CalendarConfig, MonthStyle};
pub use constants::{CS_JULIAN_DAY_OFFSET, CS_MIN_JULIAN_DAY, MAX_JULIAN_DAY, MAX_YEAR};
pub use date::CsDate;
pub use epoch::{DayCounters, YearEpoch, year_horakhun};
pub use error::CalendarError;
pub use fmt::{format_thai, format_ymd, parse_thai, parse_ymd};
pub use month::{Month, Occurrence, locate, month_span, months_in_order};
pub use naksatr::{ALL_NAKSATR, Naksatr};
pub use resolver::{ResolvedYear, resolve_window};
pub use year_type::YearType;
