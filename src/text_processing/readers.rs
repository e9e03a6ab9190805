/// Numeral readers: turn an ASCII digit string into spoken Chinese
///
/// - `read_positional`: place-value reading ("105" → "一百零五")
/// - `read_full_form`: one glyph per digit ("2025" → "二零二五")
/// - `read_fraction`: digits after a decimal point, read one by one
///
/// All three panic on non-digit input; callers hand them regex captures
/// that can only contain `[0-9]`.
use super::lexicon::{digit_glyph, ONE_TEN, PLACE_UNITS, TEN, ZERO};

/// Read an unsigned digit string with place-value units.
///
/// Digits are walked least significant first. Positions 0 through 5 take
/// the units `"" 十 百 千 万 亿`; positions from 6 on take no unit at all,
/// so the reading is only meaningful below one million. Runs of zeros voice
/// a single "零", trailing zeros are never voiced, and every "一十" is
/// shortened to "十".
pub fn read_positional(digits: &str) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(digits.len());

    for (position, ch) in digits.chars().rev().enumerate() {
        let glyph = digit_glyph(ch);
        if glyph == ZERO {
            if tokens.last().map(String::as_str) != Some(ZERO) {
                tokens.push(ZERO.to_string());
            }
        } else {
            let unit = PLACE_UNITS.get(position).copied().unwrap_or("");
            tokens.push(format!("{}{}", glyph, unit));
        }
    }

    tokens.reverse();
    let joined = tokens.concat();
    joined.trim_end_matches(ZERO).replace(ONE_TEN, TEN)
}

/// Read every digit on its own, with no place value.
pub fn read_full_form(digits: &str) -> String {
    digits.chars().map(digit_glyph).collect()
}

/// Read the fractional part of a decimal number.
pub fn read_fraction(digits: &str) -> String {
    read_full_form(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_collapses_to_bare_ten() {
        assert_eq!(read_positional("10"), "十");
    }

    #[test]
    fn test_teens() {
        assert_eq!(read_positional("15"), "十五");
        assert_eq!(read_positional("19"), "十九");
    }

    #[test]
    fn test_interior_zero_voiced_once() {
        assert_eq!(read_positional("105"), "一百零五");
        assert_eq!(read_positional("1005"), "一千零五");
        assert_eq!(read_positional("10005"), "一万零五");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(read_positional("1000"), "一千");
        assert_eq!(read_positional("500"), "五百");
        assert_eq!(read_positional("50"), "五十");
    }

    #[test]
    fn test_interior_one_ten_also_collapses() {
        // Global replacement, not only at the start
        assert_eq!(read_positional("50015"), "五万零十五");
        assert_eq!(read_positional("110"), "一百十");
    }

    #[test]
    fn test_all_place_units() {
        assert_eq!(read_positional("123456"), "一亿二万三千四百五十六");
    }

    #[test]
    fn test_positions_beyond_table_have_no_unit() {
        assert_eq!(read_positional("1000000"), "一");
        assert_eq!(read_positional("2000001"), "二零一");
    }

    #[test]
    fn test_zero_reads_as_empty() {
        assert_eq!(read_positional("0"), "");
        assert_eq!(read_positional("000"), "");
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(read_positional("007"), "零七");
    }

    #[test]
    fn test_positional_never_doubles_or_ends_with_zero() {
        for n in 0u32..20_000 {
            let reading = read_positional(&n.to_string());
            assert!(!reading.contains("零零"), "{} -> {}", n, reading);
            assert!(!reading.ends_with(ZERO), "{} -> {}", n, reading);
        }
    }

    #[test]
    fn test_full_form() {
        assert_eq!(read_full_form("2025"), "二零二五");
        assert_eq!(read_full_form("1000"), "一零零零");
        assert_eq!(read_full_form(""), "");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(read_fraction("68"), "六八");
        assert_eq!(read_fraction("05"), "零五");
    }

    #[test]
    #[should_panic]
    fn test_full_form_rejects_non_digit() {
        read_full_form("12a");
    }

    #[test]
    #[should_panic]
    fn test_positional_rejects_sign() {
        read_positional("-5");
    }
}
