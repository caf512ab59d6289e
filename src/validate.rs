use thiserror::Error;

/// Media types accepted for upload (exact, case-sensitive match).
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "application/vnd.android.package-archive",
    "application/x-msdownload",
];

/// Default payload size ceiling: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Why an upload was refused. The `Display` strings are the messages
/// returned to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Only .exe and .apk files are allowed")]
    UnsupportedType,
    #[error("File too large")]
    TooLarge,
}

/// Decide whether an upload is acceptable from its declared media type and
/// byte length alone. The file contents are never inspected; a client can
/// lie about the type, and both sides of the trust boundary know it.
pub fn validate(media_type: &str, size: u64, max_size: u64) -> Result<(), ValidationError> {
    if !ALLOWED_MEDIA_TYPES.contains(&media_type) {
        return Err(ValidationError::UnsupportedType);
    }

    if size > max_size {
        return Err(ValidationError::TooLarge);
    }

    Ok(())
}
