use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

/// Slack on top of the payload ceiling so multipart framing does not push a
/// payload exactly at the limit over the body cap; the validator holds the
/// authoritative size check.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_size as usize + MULTIPART_OVERHEAD;

    Router::new()
        // Files
        .route("/api/files", get(handlers::list_files))
        .route(
            "/api/files",
            post(handlers::create_file).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/files/:id", get(handlers::get_file))
        // Upload constraints shared with the browser client
        .route("/api/limits", get(handlers::limits))
        // Browser UI
        .route("/", get(handlers::index))
        .route("/script.js", get(handlers::script))
        .route("/styles.css", get(handlers::styles))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
