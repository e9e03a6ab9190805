/// Front-door normalization shared by CLI and server modes
///
/// Wraps the numeral pipeline with the service configuration: the
/// configured extra units, per-call units, and optional width folding.
use crate::config::ServiceConfig;
use crate::text_processing::units::DEFAULT_UNITS;
use crate::text_processing::width::fold_width;
use crate::text_processing::{Pipeline, UnitVocabulary};

#[derive(Debug, Clone)]
pub struct NormalizerService {
    base_units: UnitVocabulary,
    extra_units: Vec<String>,
    fold_width: bool,
}

impl NormalizerService {
    pub fn new(config: &ServiceConfig) -> Self {
        let base_units = config.base_vocabulary();
        let mut extra_units: Vec<String> = base_units
            .iter()
            .filter(|unit| !DEFAULT_UNITS.contains(unit))
            .map(str::to_string)
            .collect();
        extra_units.sort();

        Self {
            base_units,
            extra_units,
            fold_width: config.fold_width,
        }
    }

    /// Normalize `text`, adding `request_units` to the vocabulary for this call only
    pub fn normalize(&self, text: &str, request_units: Option<&str>) -> String {
        let mut units = self.base_units.clone();
        if let Some(list) = request_units {
            units.extend_from_list(list);
        }

        let prepared = if self.fold_width {
            fold_width(text)
        } else {
            text.to_string()
        };

        Pipeline::new(units).run(&prepared)
    }

    /// Default units in their canonical order, then configured extras
    pub fn units(&self) -> Vec<String> {
        DEFAULT_UNITS
            .iter()
            .map(|unit| unit.to_string())
            .chain(self.extra_units.iter().cloned())
            .collect()
    }
}

impl Default for NormalizerService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}
