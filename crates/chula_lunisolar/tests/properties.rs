//! Property-based tests for the converter.

use chula_lunisolar::{CS_MIN_JULIAN_DAY, CsDate};
use proptest::prelude::*;

/// Julian Day Numbers from the era epoch to roughly CS 3000.
fn jdn_strategy() -> impl Strategy<Value = i64> {
    CS_MIN_JULIAN_DAY..3_050_000i64
}

proptest! {
    // Property: day offset -> jdn -> date reproduces year, month and day
    #[test]
    fn day_offset_roundtrip(year in 0i64..3000, days in 0i64..384) {
        let d = CsDate::from_year_and_day_offset(year, days).unwrap();
        prop_assume!(days < d.days_in_year());
        // the last day of a solar year is also day 0 of the next one
        prop_assume!(d.day_of_year() < d.resolved_year().solar_days());
        let back = CsDate::from_julian_day(d.to_julian_day()).unwrap();
        prop_assert_eq!(
            (back.year(), back.month_raw(), back.day()),
            (d.year(), d.month_raw(), d.day())
        );
    }

    // Property: month/day construction agrees with day-offset construction
    #[test]
    fn inverse_consistency(year in 0i64..3000, days in 0i64..365) {
        let d = CsDate::from_year_and_day_offset(year, days).unwrap();
        let same = CsDate::from_month(d.year(), d.lunar_month(), d.day()).unwrap();
        prop_assert_eq!(same.horakhun(), d.horakhun());
        prop_assert_eq!(same.day_of_year(), days);
    }

    // Property: within a year, later day offsets are later days
    #[test]
    fn monotonic_in_year(year in 0i64..3000, a in 0i64..364, step in 1i64..20) {
        let b = (a + step).min(364);
        prop_assume!(b > a);
        let da = CsDate::from_year_and_day_offset(year, a).unwrap();
        let db = CsDate::from_year_and_day_offset(year, b).unwrap();
        prop_assert!(db.horakhun() > da.horakhun());
        prop_assert!(db > da);
    }

    // Property: adding then subtracting returns the same day
    #[test]
    fn add_subtract_closure(jdn in jdn_strategy(), n in 0i64..200_000) {
        let d = CsDate::from_julian_day(jdn).unwrap();
        let back = d.add_days(n).unwrap().subtract_days(n).unwrap();
        prop_assert_eq!(back.to_julian_day(), jdn);
        prop_assert_eq!(back, d);
    }

    // Property: every supported day converts and keeps its counters in range
    #[test]
    fn counters_in_range(jdn in jdn_strategy()) {
        let d = CsDate::from_julian_day(jdn).unwrap();
        prop_assert_eq!(d.to_julian_day(), jdn);
        prop_assert!((1..=692).contains(&d.avoman()));
        prop_assert!((0..30).contains(&d.tithi()));
        prop_assert!((0..3232).contains(&d.uccapon()));
        prop_assert!((1..=30).contains(&d.day()));
        prop_assert!((0..7).contains(&d.cs_weekday()));
        prop_assert!((0..=365).contains(&d.day_of_year()));
    }

    // Property: consecutive days differ by one
    #[test]
    fn consecutive_days(jdn in jdn_strategy()) {
        let d = CsDate::from_julian_day(jdn).unwrap();
        let next = CsDate::from_julian_day(jdn + 1).unwrap();
        prop_assert_eq!(next - d, 1);
        prop_assert_eq!((next.cs_weekday() + 6) % 7, d.cs_weekday());
    }

    // Property: the numeric form reads back to the same day
    #[test]
    fn ymd_roundtrip(jdn in jdn_strategy()) {
        let d = CsDate::from_julian_day(jdn).unwrap();
        prop_assume!(d.day_of_year() < d.days_in_year());
        let back: CsDate = d.to_ymd_string().parse().unwrap();
        prop_assert_eq!(back, d);
    }
}
