//! File uploads.
//!
//! The multipart `file` field is streamed to `UPLOAD_TMP_DIR`, then handed
//! to MinIO/S3 under the public prefix. The staging copy never outlives
//! the request.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::UploadService;
