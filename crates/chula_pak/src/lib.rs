//! Pakkhakhananaa, the Thai fortnight-count calendar.
//!
//! Days since the epoch of 1736-01-28 are written in a mixed radix of
//! five rows over a fixed layout board, ending in the day of a 14- or
//! 15-day fortnight. A full cycle is 289577 days (19612 fortnights).
//!
//! This crate provides:
//! - `PakDate` conversion from Julian Day Numbers and `cycle-a:b:c:d:e:f` codes
//! - The fortnight count (ปักขเกณฑ์) and waxing/waning phase
//! - The long Thai form, the two-line abbreviation and the layout board

pub mod board;
pub mod date;
pub mod error;
pub mod layout;

pub use board::board;
pub use date::{PAK_DAYS_IN_CYCLE, PAK_FORTNIGHTS_IN_CYCLE, PAK_JULIAN_DAY_OFFSET, PakDate};
pub use error::PakError;
pub use layout::Size;
