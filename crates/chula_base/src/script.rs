//! Thai script helpers: digit transliteration and display width.

const THAI_ZERO: u32 = 0x0E50;

/// Base (non-combining) Thai characters, i.e. the ones that take up a column.
const THAI_CENTRAL_CHARS: &str = "ผปแอทมใฝฉฮฬฦฟหกดเาสวงฤฆฏโฌษศซๆไำพะรนยบลฃ๐ฎฑธณฯญฐฅๅ๑๒ภ๓ถ๔฿ค๕ต๖จ๗ข๘ช๙";

/// Replace ASCII digits with Thai digits, leaving everything else untouched.
pub fn digits_to_thai(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(THAI_ZERO + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Replace Thai digits with ASCII digits, leaving everything else untouched.
pub fn digits_to_arabic(s: &str) -> String {
    s.chars()
        .map(|c| {
            let code = u32::from(c);
            if (THAI_ZERO..THAI_ZERO + 10).contains(&code) {
                char::from_digit(code - THAI_ZERO, 10).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Terminal column count of a Thai string, ignoring vowel and tone marks.
pub fn thai_string_width(s: &str) -> usize {
    s.chars()
        .filter(|c| c.is_ascii() || THAI_CENTRAL_CHARS.contains(*c))
        .count()
}
