/// Numeral rewrite rules
///
/// Each rule rewrites every match in the whole text in one sweep. Rules run
/// in a fixed order (see `pipeline`), and because a rewrite replaces digits
/// with Chinese characters, a span handled by an earlier rule is invisible
/// to every later one:
/// 1. Percentages: "50.68%" → "百分之五十点六八"
/// 2. Relative years: "500年前" → "五百年前"
/// 3. Absolute years: "2025年" → "二零二五年"
/// 4. Negative numbers: "-1000" → "负一千"
/// 5. Decimals: "3000.6" → "三千点六"
/// 6. Integers followed by a unit: "50015人" → "五万零十五人人" (collapsed later)
/// 7. Any other integer, digit by digit: "110" → "一一零"
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::lexicon::{NEGATIVE, PERCENT_OF, POINT, YEAR, YEARS_AGO, YEARS_LATER};
use super::readers::{read_fraction, read_full_form, read_positional};
use super::units::UnitVocabulary;

lazy_static! {
    /// Matches: 50%, 50.68%, 5.%
    static ref PERCENTAGE_REGEX: Regex = Regex::new(r"([0-9]+)\.?([0-9]*)%").unwrap();

    /// Matches: 500年前, 1000年后
    static ref RELATIVE_YEAR_REGEX: Regex =
        Regex::new(&format!(r"([0-9]+)({}|{})", YEARS_AGO, YEARS_LATER)).unwrap();

    /// Exactly four digits before 年. Not anchored on the left, so the last
    /// four digits of a longer run still match.
    static ref ABSOLUTE_YEAR_REGEX: Regex =
        Regex::new(&format!(r"([0-9]{{4}}){}", YEAR)).unwrap();

    static ref NEGATIVE_REGEX: Regex = Regex::new(r"-([0-9]+)").unwrap();

    static ref DECIMAL_REGEX: Regex = Regex::new(r"([0-9]+)\.([0-9]+)").unwrap();

    /// A maximal run of ASCII digits
    static ref DIGIT_RUN_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

pub fn normalize_percentages(text: &str) -> String {
    PERCENTAGE_REGEX
        .replace_all(text, |caps: &Captures| {
            let integer = read_positional(&caps[1]);
            let fraction = &caps[2];
            if fraction.is_empty() {
                format!("{}{}", PERCENT_OF, integer)
            } else {
                format!("{}{}{}{}", PERCENT_OF, integer, POINT, read_fraction(fraction))
            }
        })
        .to_string()
}

pub fn normalize_relative_years(text: &str) -> String {
    RELATIVE_YEAR_REGEX
        .replace_all(text, |caps: &Captures| {
            format!("{}{}", read_positional(&caps[1]), &caps[2])
        })
        .to_string()
}

/// Years are read digit by digit, the way they are spoken.
pub fn normalize_absolute_years(text: &str) -> String {
    ABSOLUTE_YEAR_REGEX
        .replace_all(text, |caps: &Captures| {
            format!("{}{}", read_full_form(&caps[1]), YEAR)
        })
        .to_string()
}

pub fn normalize_negatives(text: &str) -> String {
    NEGATIVE_REGEX
        .replace_all(text, |caps: &Captures| {
            format!("{}{}", NEGATIVE, read_positional(&caps[1]))
        })
        .to_string()
}

pub fn normalize_decimals(text: &str) -> String {
    DECIMAL_REGEX
        .replace_all(text, |caps: &Captures| {
            format!(
                "{}{}{}",
                read_positional(&caps[1]),
                POINT,
                read_fraction(&caps[2])
            )
        })
        .to_string()
}

/// Rewrite digit runs that sit directly in front of a unit token.
///
/// The unit is looked at but not consumed: the reading is followed by the
/// matched unit and the original unit stays in place, so "5元" becomes
/// "五元元". `collapse_duplicate_units` folds the pair back into one.
pub fn normalize_unit_quantities(text: &str, units: &UnitVocabulary) -> String {
    if units.is_empty() {
        return text.to_string();
    }
    let candidates = units.match_order();
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for digits in DIGIT_RUN_REGEX.find_iter(text) {
        let following = &text[digits.end()..];
        if let Some(unit) = candidates.iter().find(|unit| following.starts_with(**unit)) {
            result.push_str(&text[last_end..digits.start()]);
            result.push_str(&read_positional(digits.as_str()));
            result.push_str(unit);
            last_end = digits.end();
        }
    }

    result.push_str(&text[last_end..]);
    result
}

/// Catch-all for integers no earlier rule claimed: read digit by digit.
pub fn normalize_pure_integers(text: &str) -> String {
    DIGIT_RUN_REGEX
        .replace_all(text, |caps: &Captures| read_full_form(&caps[0]))
        .to_string()
}
