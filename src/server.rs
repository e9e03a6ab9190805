use axum::{
    body::Bytes,
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::logging::{access_log_middleware, request_id_middleware};
use crate::models::{HealthResponse, NormalizeRequest, NormalizeResponse, UnitsResponse};
use crate::services::NormalizerService;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<NormalizerService>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            normalizer: Arc::new(NormalizerService::new(config)),
            request_timeout: config.request_timeout,
        }
    }
}

// HTTP Handlers

/// Spell out the numerals in the request text
///
/// The body is parsed by hand so malformed JSON gets the same error shape
/// as every other validation failure.
async fn normalize_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NormalizeResponse>> {
    let req: NormalizeRequest = serde_json::from_slice(&body)?;
    req.validate()?;

    tracing::debug!(
        "Normalize request - text_len={}, units={:?}",
        req.text.chars().count(),
        req.units
    );

    let normalized = state.normalizer.normalize(&req.text, req.units.as_deref());

    Ok(Json(NormalizeResponse::success(&req.text, normalized)))
}

/// List the units recognized without per-request additions
async fn list_units(State(state): State<AppState>) -> Json<UnitsResponse> {
    Json(UnitsResponse {
        units: state.normalizer.units(),
    })
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (adjust as needed for production)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(state.request_timeout);

    Router::new()
        .route("/normalize", post(normalize_text))
        .route("/units", get(list_units))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(middleware::from_fn(access_log_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(timeout)
        .layer(cors)
}
