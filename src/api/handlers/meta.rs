use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::validate::ALLOWED_MEDIA_TYPES;
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// The upload constraints, published so the browser client validates against
/// the same values the server enforces instead of duplicating literals.
#[derive(Debug, Serialize)]
pub struct LimitsResponse {
    #[serde(rename = "maxFileSize")]
    pub max_file_size: u64,
    #[serde(rename = "allowedTypes")]
    pub allowed_types: &'static [&'static str],
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn limits(State(state): State<Arc<AppState>>) -> Json<LimitsResponse> {
    Json(LimitsResponse {
        max_file_size: state.config.max_upload_size,
        allowed_types: ALLOWED_MEDIA_TYPES,
    })
}
