use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for the rolling JSON log file; file logging is off when unset
    pub log_dir: Option<String>,

    /// Filter for console output (default: "numeral_normalizer=info")
    pub console_log_level: String,

    /// Filter for file output (default: "debug")
    pub file_log_level: String,

    /// Console format: "json", "pretty", or "compact" (default: "compact")
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            console_log_level: "numeral_normalizer=info".to_string(),
            file_log_level: "debug".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("NORMALIZER_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.log_dir = Some(dir);
            }
        }

        if let Ok(level) = env::var("RUST_LOG") {
            config.console_log_level = level;
        }

        if let Ok(level) = env::var("NORMALIZER_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Ok(format_str) = env::var("LOG_FORMAT") {
            config.format = LogFormat::parse(&format_str);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.console_log_level, "numeral_normalizer=info");
        assert_eq!(config.file_log_level, "debug");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Compact);
    }
}
