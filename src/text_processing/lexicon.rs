/// Spoken Chinese tokens used by the numeral readers and rewrite rules
///
/// Everything here is a process-wide constant. Readers index into these
/// tables and never allocate them.

/// Spoken glyphs for the digits `0` through `9`
pub const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Place-value units for digit positions 0..=5, least significant first
pub const PLACE_UNITS: [&str; 6] = ["", "十", "百", "千", "万", "亿"];

pub const ZERO: &str = "零";
pub const TEN: &str = "十";
pub const ONE_TEN: &str = "一十";

pub const PERCENT_OF: &str = "百分之";
pub const POINT: &str = "点";
pub const NEGATIVE: &str = "负";
pub const PER: &str = "每";
pub const YEAR: &str = "年";
pub const YEARS_AGO: &str = "年前";
pub const YEARS_LATER: &str = "年后";

/// Look up the spoken glyph for one ASCII digit.
///
/// # Panics
///
/// Panics when `ch` is not `'0'..='9'`. Every rule pattern only ever
/// captures ASCII digit runs, so reaching this with anything else is a
/// bug in the pattern that produced the span.
pub fn digit_glyph(ch: char) -> &'static str {
    match ch.to_digit(10) {
        Some(d) if ch.is_ascii_digit() => DIGITS[d as usize],
        _ => panic!("numeral reader received non-digit character {:?}", ch),
    }
}
