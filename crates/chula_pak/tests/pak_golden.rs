//! Golden-value tests for Pakkhakhananaa conversion.

use chula_base::SolarDate;
use chula_pak::{PakDate, PakError};

struct Reference {
    jdn: i64,
    code: &'static str,
    horakhun: i64,
    pakkhagen: i64,
    waxing: bool,
    abbreviation: &'static str,
    text: &'static str,
}

const REFERENCES: &[Reference] = &[
    Reference {
        jdn: 2_355_148,
        code: "1-1:1:1:1:1:1",
        horakhun: 1,
        pakkhagen: 1,
        waxing: false,
        abbreviation: "๑ก๑ก๑",
        text: "มหาสัมพยุหะ ๑ จุลพยุหะ ๑ มหาสมุหะ ๑ จุลวรรค ๑ มหาปักข์ ๑ แรม ๑ ค่ำ (ปักข์ถ้วน)",
    },
    Reference {
        jdn: 2_451_545,
        code: "1-6:11:5:2:2:10",
        horakhun: 96_398,
        pakkhagen: 6529,
        waxing: false,
        abbreviation: "๖๑๕ข๒\n ๑",
        text: "มหาสัมพยุหะ ๖ มหาพยุหะ ๑๑ มหาสมุหะ ๕ จุลวรรค ๒ มหาปักข์ ๒ แรม ๑๐ ค่ำ (ปักข์ถ้วน)",
    },
    Reference {
        jdn: 2_460_000,
        code: "1-7:6:3:2:4:4",
        horakhun: 104_853,
        pakkhagen: 7102,
        waxing: true,
        abbreviation: "๗ฉ๓ขจ",
        text: "มหาสัมพยุหะ ๗ จุลพยุหะ ๖ มหาสมุหะ ๓ จุลวรรค ๒ จุลปักข์ ๔ ขึ้น ๔ ค่ำ (ปักข์ขาด)",
    },
    Reference {
        jdn: 2_460_236,
        code: "1-7:6:4:2:3:4",
        horakhun: 105_089,
        pakkhagen: 7118,
        waxing: true,
        abbreviation: "๗ฉ๔ข๓",
        text: "มหาสัมพยุหะ ๗ จุลพยุหะ ๖ มหาสมุหะ ๔ จุลวรรค ๒ มหาปักข์ ๓ ขึ้น ๔ ค่ำ (ปักข์ถ้วน)",
    },
    Reference {
        jdn: 2_644_724,
        code: "1-18:10:7:3:5:14",
        horakhun: 289_577,
        pakkhagen: 19_612,
        waxing: true,
        abbreviation: "ก๑ษ๓ห\nฐ๐",
        text: "จุลสัมพยุหะ ๑๘ มหาพยุหะ ๑๐ จุลสมุหะ ๗ มหาวรรค ๓ จุลปักข์ ๕ ขึ้น ๑๔ ค่ำ (ปักข์ขาด)",
    },
    Reference {
        jdn: 2_644_725,
        code: "2-1:1:1:1:1:1",
        horakhun: 289_578,
        pakkhagen: 19_613,
        waxing: false,
        abbreviation: "๑ก๑ก๑",
        text: "มหาสัมพยุหะ ๑ จุลพยุหะ ๑ มหาสมุหะ ๑ จุลวรรค ๑ มหาปักข์ ๑ แรม ๑ ค่ำ (ปักข์ถ้วน)",
    },
];

#[test]
fn from_julian_day_matches_references() {
    for r in REFERENCES {
        let p = PakDate::from_julian_day(r.jdn).unwrap();
        assert_eq!(p.code(), r.code, "jdn {}", r.jdn);
        assert_eq!(p.horakhun(), r.horakhun, "jdn {}", r.jdn);
        assert_eq!(p.pakkhagen(), r.pakkhagen, "jdn {}", r.jdn);
        assert_eq!(p.is_waxing(), r.waxing, "jdn {}", r.jdn);
        assert_eq!(p.abbreviation(), r.abbreviation, "jdn {}", r.jdn);
        assert_eq!(p.to_string(), r.text, "jdn {}", r.jdn);
    }
}

#[test]
fn codes_read_back() {
    for r in REFERENCES {
        let p: PakDate = r.code.parse().unwrap();
        assert_eq!(p.to_julian_day(), r.jdn, "{}", r.code);
    }
}

#[test]
fn non_normal_code_is_carried() {
    let p = PakDate::from_code("1-7:5:6:2:3:4").unwrap();
    assert_eq!(p.to_julian_day(), 2_459_291);
    assert_eq!(p.code(), "1-7:5:6:2:3:4");
}

#[test]
fn epoch_is_1736_01_28() {
    let p = PakDate::from_solar(&SolarDate::new(1736, 1, 28)).unwrap();
    assert_eq!(p.code(), "1-1:1:1:1:1:1");
    assert!(matches!(
        PakDate::from_solar(&SolarDate::new(1736, 1, 27)),
        Err(PakError::EpochRange { .. })
    ));
}

#[test]
fn board_j2000() {
    let p = PakDate::from_julian_day(2_451_545).unwrap();
    assert_eq!(p.board(), "           ๑  ๒  ๓  ๔  ๕  ๖  ๗  ๘  ๙ ๑๐ ๑๑ ๑๒ ๑๓ ๑๔ ๑๕ ๑๖ ๑๗ ๑๘\nปักขคณนา    ม  ม  ม  ม  ม \x1b[;7m ม\x1b[0;0m  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  จ\nมหาสัมพยุหะ  จ  จ  จ  จ  จ  จ  จ  จ  จ  จ \x1b[;7m ม\x1b[0;0m\nจุลสัมพยุหะ   จ  จ  จ  จ  จ  จ  จ  จ  จ  ม\nมหาพยุหะ    ม  ม  ม  ม \x1b[;7m ม\x1b[0;0m  ม  จ\nจุลพยุหะ     ม  ม  ม  ม  ม  จ\nมหาสมุหะ    จ \x1b[;7m จ\x1b[0;0m  จ  ม\nจุลสมุหะ     จ  จ  ม\nมหาวรรค    ม  ม  ม  ม  จ\nจุลวรรค     ม \x1b[;7m ม\x1b[0;0m  ม  จ\nมหาปักข์     ๑  ๒  ๓  ๔  ๕  ๖  ๗  ๘  ๙ \x1b[;7m๑๐\x1b[0;0m ๑๑ ๑๒ ๑๓ ๑๔ ๑๕\nจุลปักข์      ๑  ๒  ๓  ๔  ๕  ๖  ๗  ๘  ๙ ๑๐ ๑๑ ๑๒ ๑๓ ๑๔\n           รอบที่ ๑   หรคุณปักขคณนา ๙๖๓๙๘   ปักขเกณฑ์ ๖๕๒๙\n");
}

#[test]
fn board_epoch() {
    let p = PakDate::from_julian_day(2_355_148).unwrap();
    assert_eq!(p.board(), "           ๑  ๒  ๓  ๔  ๕  ๖  ๗  ๘  ๙ ๑๐ ๑๑ ๑๒ ๑๓ ๑๔ ๑๕ ๑๖ ๑๗ ๑๘\nปักขคณนา   \x1b[;7m ม\x1b[0;0m  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  ม  จ\nมหาสัมพยุหะ \x1b[;7m จ\x1b[0;0m  จ  จ  จ  จ  จ  จ  จ  จ  จ  ม\nจุลสัมพยุหะ   จ  จ  จ  จ  จ  จ  จ  จ  จ  ม\nมหาพยุหะ    ม  ม  ม  ม  ม  ม  จ\nจุลพยุหะ    \x1b[;7m ม\x1b[0;0m  ม  ม  ม  ม  จ\nมหาสมุหะ   \x1b[;7m จ\x1b[0;0m  จ  จ  ม\nจุลสมุหะ     จ  จ  ม\nมหาวรรค    ม  ม  ม  ม  จ\nจุลวรรค    \x1b[;7m ม\x1b[0;0m  ม  ม  จ\nมหาปักข์    \x1b[;7m ๑\x1b[0;0m  ๒  ๓  ๔  ๕  ๖  ๗  ๘  ๙ ๑๐ ๑๑ ๑๒ ๑๓ ๑๔ ๑๕\nจุลปักข์      ๑  ๒  ๓  ๔  ๕  ๖  ๗  ๘  ๙ ๑๐ ๑๑ ๑๒ ๑๓ ๑๔\n           รอบที่ ๑   หรคุณปักขคณนา ๑   ปักขเกณฑ์ ๑\n");
}
