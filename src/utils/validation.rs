use crate::api::error::AppError;

/// Maximum upload size: 10 MiB
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Allowed MIME types for the media library: raster images, SVG, web video, PDF
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/svg+xml",
    "video/mp4",
    "video/webm",
    "application/pdf",
];

/// Validates MIME type against the allowlist. Membership is exact: the
/// allow-list is a fixed set, so declared types are not case-folded and
/// parameters are not stripped.
pub fn validate_mime_type(content_type: &str) -> Result<(), AppError> {
    if ALLOWED_MIME_TYPES
        .iter()
        .any(|&allowed| allowed == content_type)
    {
        return Ok(());
    }

    Err(AppError::UnsupportedType(format!(
        "File type '{}' is not allowed. Allowed types: {}",
        content_type,
        ALLOWED_MIME_TYPES.join(", ")
    )))
}

/// Validates file size against the configured ceiling
pub fn validate_file_size(size: usize, max_size: usize) -> Result<(), AppError> {
    if size > max_size {
        return Err(AppError::FileTooLarge(format!(
            "File size {} bytes exceeds maximum allowed {} bytes ({} MB)",
            size,
            max_size,
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mime_type() {
        assert!(validate_mime_type("image/jpeg").is_ok());
        assert!(validate_mime_type("image/jpg").is_ok());
        assert!(validate_mime_type("image/svg+xml").is_ok());
        assert!(validate_mime_type("video/webm").is_ok());
        assert!(validate_mime_type("application/pdf").is_ok());

        // Membership is exact: no parameter stripping or case folding
        assert!(validate_mime_type("image/png; charset=binary").is_err());
        assert!(validate_mime_type("IMAGE/PNG").is_err());

        assert!(validate_mime_type("text/html").is_err());
        assert!(validate_mime_type("application/javascript").is_err());
        assert!(validate_mime_type("application/octet-stream").is_err());
        assert!(validate_mime_type("").is_err());
    }

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(1024, MAX_UPLOAD_SIZE).is_ok());
        assert!(validate_file_size(MAX_UPLOAD_SIZE, MAX_UPLOAD_SIZE).is_ok());
        assert!(validate_file_size(MAX_UPLOAD_SIZE + 1, MAX_UPLOAD_SIZE).is_err());
    }

    #[test]
    fn test_size_error_names_ceiling() {
        let err = validate_file_size(MAX_UPLOAD_SIZE + 1, MAX_UPLOAD_SIZE).unwrap_err();
        assert!(err.to_string().contains("10485760"));
    }
}
