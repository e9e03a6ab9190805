pub mod constants;

use std::env;
use std::time::Duration;

use crate::text_processing::UnitVocabulary;
use constants::{DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Configuration shared by the CLI and server modes
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Port for server mode (default: 3000)
    pub port: u16,

    /// Comma-separated units merged into every call's vocabulary (default: none)
    pub extra_units: Option<String>,

    /// Fold full-width digits and symbols before normalizing (default: true)
    pub fold_width: bool,

    /// Per-request timeout in server mode (default: 30s)
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            extra_units: None,
            fold_width: true,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("NORMALIZER_PORT").and_then(|v| v.parse::<u16>().ok()) {
            config.port = port;
        }

        // Blank lists are treated as unset
        config.extra_units = lookup("NORMALIZER_EXTRA_UNITS").filter(|v| !v.trim().is_empty());

        if let Some(val) = lookup("NORMALIZER_FOLD_WIDTH") {
            config.fold_width = val.to_lowercase() != "false";
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECONDS").and_then(|v| v.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }

        config
    }

    /// The unit vocabulary every call starts from: defaults plus `extra_units`
    pub fn base_vocabulary(&self) -> UnitVocabulary {
        UnitVocabulary::with_additional(self.extra_units.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 3000);
        assert!(config.fold_width);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_values() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("NORMALIZER_PORT", "8080"),
            ("NORMALIZER_EXTRA_UNITS", "公里,克"),
            ("NORMALIZER_FOLD_WIDTH", "FALSE"),
            ("REQUEST_TIMEOUT_SECONDS", "120"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.extra_units.as_deref(), Some("公里,克"));
        assert!(!config.fold_width);
        assert_eq!(config.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("NORMALIZER_PORT", "not-a-port"),
            ("REQUEST_TIMEOUT_SECONDS", "-1"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_blank_extra_units_ignored() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("NORMALIZER_EXTRA_UNITS", "  ")]));
        assert_eq!(config.extra_units, None);
    }

    #[test]
    fn test_base_vocabulary_includes_extra_units() {
        let config = ServiceConfig {
            extra_units: Some("公里".to_string()),
            ..ServiceConfig::default()
        };
        let vocabulary = config.base_vocabulary();
        assert!(vocabulary.contains("公里"));
        assert!(vocabulary.contains("元"));
    }
}
