use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored upload. Created once by `Registry::insert`, never mutated,
/// dropped only when the process exits.
///
/// The wire shape is the record itself, no envelope:
/// `{ id, name, type, size, data, uploadedAt }` with `data` base64-encoded
/// and `uploadedAt` in epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: u64,
    /// Original filename as supplied by the uploader. Opaque; not sanitized.
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub size: u64,
    #[serde(with = "base64_bytes")]
    pub data: Bytes,
    #[serde(rename = "uploadedAt", with = "chrono::serde::ts_milliseconds")]
    pub uploaded_at: DateTime<Utc>,
}

/// Serde adapter for payload bytes as a base64 string.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded)
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}
