/// Numeral normalization pipeline
///
/// Runs the numeral rules and then the cleanup passes, always in the order
/// of [`Pass::ORDER`]. Every pass receives the full output of the one before
/// it. Nothing is shared between calls apart from immutable compiled regexes.
use super::cleanup::{collapse_duplicate_units, convert_decimal_points, convert_rate_slashes};
use super::rules::{
    normalize_absolute_years, normalize_decimals, normalize_negatives, normalize_percentages,
    normalize_pure_integers, normalize_relative_years, normalize_unit_quantities,
};
use super::units::UnitVocabulary;

/// One whole-text rewrite step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Percentage,
    RelativeYear,
    AbsoluteYear,
    Negative,
    Decimal,
    UnitQuantity,
    PureInteger,
    CollapseUnits,
    DecimalPoint,
    RateSlash,
}

impl Pass {
    /// Execution order. Earlier passes claim digits before later ones see them.
    pub const ORDER: [Pass; 10] = [
        Pass::Percentage,
        Pass::RelativeYear,
        Pass::AbsoluteYear,
        Pass::Negative,
        Pass::Decimal,
        Pass::UnitQuantity,
        Pass::PureInteger,
        Pass::CollapseUnits,
        Pass::DecimalPoint,
        Pass::RateSlash,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pass::Percentage => "percentage",
            Pass::RelativeYear => "relative_year",
            Pass::AbsoluteYear => "absolute_year",
            Pass::Negative => "negative",
            Pass::Decimal => "decimal",
            Pass::UnitQuantity => "unit_quantity",
            Pass::PureInteger => "pure_integer",
            Pass::CollapseUnits => "collapse_units",
            Pass::DecimalPoint => "decimal_point",
            Pass::RateSlash => "rate_slash",
        }
    }

    pub fn apply(&self, text: &str, units: &UnitVocabulary) -> String {
        match self {
            Pass::Percentage => normalize_percentages(text),
            Pass::RelativeYear => normalize_relative_years(text),
            Pass::AbsoluteYear => normalize_absolute_years(text),
            Pass::Negative => normalize_negatives(text),
            Pass::Decimal => normalize_decimals(text),
            Pass::UnitQuantity => normalize_unit_quantities(text, units),
            Pass::PureInteger => normalize_pure_integers(text),
            Pass::CollapseUnits => collapse_duplicate_units(text, units),
            Pass::DecimalPoint => convert_decimal_points(text),
            Pass::RateSlash => convert_rate_slashes(text),
        }
    }
}

/// A pipeline bound to one unit vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    units: UnitVocabulary,
}

impl Pipeline {
    pub fn new(units: UnitVocabulary) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &UnitVocabulary {
        &self.units
    }

    /// Apply every pass to `text` in order.
    pub fn run(&self, text: &str) -> String {
        let mut result = text.to_string();

        for pass in Pass::ORDER {
            let rewritten = pass.apply(&result, &self.units);
            if rewritten != result {
                tracing::trace!(pass = pass.name(), output = %rewritten, "Pass rewrote text");
            }
            result = rewritten;
        }

        tracing::debug!(
            input_chars = text.chars().count(),
            output_chars = result.chars().count(),
            units = self.units.len(),
            "Numerals normalized"
        );

        result
    }
}

/// Spell out every Arabic numeral in `text` in Chinese.
///
/// `additional_units` is a comma-separated list merged with the default
/// unit vocabulary for this call only.
///
/// Examples:
/// - "50.68%" → "百分之五十点六八"
/// - "2025年" → "二零二五年"
/// - "50015人" → "五万零十五人"
/// - "3000.6元/人" → "三千点六元每人"
pub fn normalize(text: &str, additional_units: Option<&str>) -> String {
    Pipeline::new(UnitVocabulary::with_additional(additional_units)).run(text)
}
