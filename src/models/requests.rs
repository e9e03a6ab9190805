use serde::Deserialize;

use crate::config::constants::MAX_TEXT_LENGTH;
use crate::error::{NormalizerError, Result};

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
    /// Comma-separated units added to the vocabulary for this request only
    #[serde(default)]
    pub units: Option<String>,
}

impl NormalizeRequest {
    /// Reject empty or oversized text before it reaches the pipeline
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(NormalizerError::EmptyText);
        }

        let length = self.text.chars().count();
        if length > MAX_TEXT_LENGTH {
            return Err(NormalizerError::TextTooLong {
                length,
                max: MAX_TEXT_LENGTH,
            });
        }

        Ok(())
    }
}
