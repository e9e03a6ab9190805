use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

#[derive(Debug)]
pub enum NormalizerError {
    // I/O errors
    Io(std::io::Error),

    // Request validation errors
    EmptyText,
    TextTooLong { length: usize, max: usize },
    InvalidRequest(String),

    // Startup errors
    InvalidConfig(String),

    // Internal errors
    Unknown(String),
}

impl fmt::Display for NormalizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizerError::Io(e) => write!(f, "I/O error: {}", e),
            NormalizerError::EmptyText => write!(f, "Text cannot be empty"),
            NormalizerError::TextTooLong { length, max } => write!(
                f,
                "Text too long: {} characters (maximum {})",
                length, max
            ),
            NormalizerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            NormalizerError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            NormalizerError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for NormalizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Conversions
impl From<std::io::Error> for NormalizerError {
    fn from(err: std::io::Error) -> Self {
        NormalizerError::Io(err)
    }
}

impl From<serde_json::Error> for NormalizerError {
    fn from(err: serde_json::Error) -> Self {
        NormalizerError::InvalidRequest(err.to_string())
    }
}

impl NormalizerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NormalizerError::EmptyText
            | NormalizerError::TextTooLong { .. }
            | NormalizerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Axum integration
impl IntoResponse for NormalizerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (
            status,
            axum::Json(serde_json::json!({
                "status": "error",
                "error": message
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
