/// Cleanup passes run after every numeral rule
///
/// - Doubled unit tokens are folded to one ("人人" → "人")
/// - Leftover decimal points become "点"
/// - "元/人" style rates become "元每人"
use lazy_static::lazy_static;
use regex::Regex;

use super::lexicon::{PER, POINT};
use super::units::UnitVocabulary;

lazy_static! {
    /// Two words around a slash, spaces around the slash allowed
    static ref RATE_REGEX: Regex = Regex::new(r"(\w+)\s*/\s*(\w+)").unwrap();
}

/// Fold any run of a repeated unit token into a single occurrence.
///
/// Sweeps the whole vocabulary until nothing changes, since folding one
/// token can expose a doubled occurrence of another.
pub fn collapse_duplicate_units(text: &str, units: &UnitVocabulary) -> String {
    let mut result = text.to_string();
    let candidates = units.match_order();

    loop {
        let before = result.len();
        for unit in &candidates {
            let doubled = unit.repeat(2);
            while result.contains(&doubled) {
                result = result.replace(&doubled, unit);
            }
        }
        if result.len() == before {
            return result;
        }
    }
}

pub fn convert_decimal_points(text: &str) -> String {
    text.replace('.', POINT)
}

/// "元/人" → "元每人"; chains like "米/秒/秒" are rewritten all the way through.
pub fn convert_rate_slashes(text: &str) -> String {
    let mut result = text.to_string();
    while RATE_REGEX.is_match(&result) {
        result = RATE_REGEX
            .replace_all(&result, format!("${{1}}{}${{2}}", PER).as_str())
            .to_string();
    }
    result
}
