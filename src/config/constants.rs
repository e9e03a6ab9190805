/// Maximum allowed text length for normalize requests (in characters)
///
/// Requests exceeding this limit are rejected with a 400 error.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Port used by server mode when `NORMALIZER_PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Per-request timeout used when `REQUEST_TIMEOUT_SECONDS` is not set
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_text_length_reasonable() {
        assert!(MAX_TEXT_LENGTH > 0);
        assert!(MAX_TEXT_LENGTH <= 100_000); // Sanity check
    }

    #[test]
    fn test_default_timeout_nonzero() {
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS > 0);
    }
}
