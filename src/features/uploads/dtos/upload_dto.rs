use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart form for `POST /upload`, for Swagger UI only.
/// The handler reads the form with axum's `Multipart` extractor.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponseDto {
    /// Object key in the bucket
    pub key: String,
    /// Direct URL of the stored file
    pub url: String,
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
}

/// Allowed MIME types for file uploads
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

/// File extension for an allowed content type
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_allowed_type_has_an_extension() {
        for mime in ALLOWED_MIME_TYPES {
            assert!(is_mime_type_allowed(mime));
            assert!(extension_for(mime).is_some(), "{mime} has no extension");
        }
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!is_mime_type_allowed("text/html"));
        assert!(!is_mime_type_allowed("application/octet-stream"));
        assert_eq!(extension_for("text/html"), None);
    }
}
