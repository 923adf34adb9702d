//! Golden-value tests for the Julian Day bridge.
//!
//! Reference JDNs are taken from published almanac tables.

use chula_base::{JulianDay, SolarDate, jdn_to_solar, solar_to_jdn};

#[test]
fn published_reference_days() {
    let cases = [
        ((2000, 1, 1), 2_451_545),
        ((1970, 1, 1), 2_440_588),
        ((1858, 11, 17), 2_400_001),
        ((1582, 10, 15), 2_299_161),
        ((1582, 10, 4), 2_299_160),
        ((1736, 1, 28), 2_355_148),
        ((638, 3, 22), 1_954_168),
        ((1, 1, 1), 1_721_424),
        ((-4712, 1, 1), 0),
    ];
    for ((y, m, d), jdn) in cases {
        assert_eq!(solar_to_jdn(y, m, d), jdn, "{y}-{m}-{d}");
        assert_eq!(jdn_to_solar(jdn), (y, m, d), "jdn {jdn}");
    }
}

#[test]
fn roundtrip_every_day_across_reform() {
    for jdn in 2_290_000..2_310_000 {
        let (y, m, d) = jdn_to_solar(jdn);
        assert_eq!(solar_to_jdn(y, m, d), jdn, "jdn {jdn} -> {y}-{m}-{d}");
    }
}

#[test]
fn roundtrip_sparse_wide_range() {
    for jdn in (-500_000..3_500_000).step_by(97) {
        let (y, m, d) = jdn_to_solar(jdn);
        assert_eq!(solar_to_jdn(y, m, d), jdn, "jdn {jdn} -> {y}-{m}-{d}");
    }
}

#[test]
fn consecutive_days_are_consecutive() {
    let mut prev = solar_to_jdn(1999, 12, 31);
    for day in 1..=31 {
        let jdn = SolarDate::new(2000, 1, day).julian_day();
        assert_eq!(jdn, prev + 1);
        prev = jdn;
    }
}
