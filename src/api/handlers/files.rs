use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::Json;
use bytes::Bytes;

use crate::api::response::ApiError;
use crate::registry::FileRecord;
use crate::validate::validate;
use crate::AppState;

/// Upload a single file.
/// Route: POST /api/files (multipart, field `file`)
///
/// The whole payload is buffered and validated before the registry is
/// touched, so a request that fails (or is cancelled mid-transfer) never
/// produces a partial record.
pub async fn create_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<FileRecord>, ApiError> {
    let mut upload: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        if field.name() != Some("file") {
            // Ignore unknown fields
            continue;
        }

        let name = field.file_name().unwrap_or("upload.bin").to_string();
        // A missing declared type gets the browser default and is rejected
        // by the allow-set check below.
        let media_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

        // Only the first file field counts; uploads are single-file.
        upload = Some((name, media_type, data));
        break;
    }

    let (name, media_type, data) =
        upload.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    validate(&media_type, data.len() as u64, state.config.max_upload_size)?;

    let record = state.registry.insert(&name, &media_type, data);

    tracing::debug!(file_id = record.id, name = %record.name, size = record.size, "Stored file");

    Ok(Json(record))
}

/// Fetch one file by id.
/// Route: GET /api/files/:id
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    // Non-numeric ids fall through to the same not-found response.
    let record = id
        .parse::<u64>()
        .ok()
        .and_then(|id| state.registry.get(id))
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    Ok(Json(record))
}

/// List every stored file, payloads included, in upload order.
/// Route: GET /api/files
pub async fn list_files(State(state): State<Arc<AppState>>) -> Json<Vec<FileRecord>> {
    Json(state.registry.list_all())
}
