//! filedrop - A minimal in-memory file drop box with a browser UI
//!
//! This crate provides single-file upload, listing, and retrieval with:
//! - An append-only in-memory registry (process-lifetime storage, no persistence)
//! - A fixed allow-set of two MIME types and a hard size cap, enforced server-side
//! - REST API with multipart upload support
//! - A drag-and-drop browser client served as embedded static assets

pub mod api;
pub mod config;
pub mod registry;
pub mod validate;

use config::Config;
use registry::Registry;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub registry: Registry,
}
