//! Storage module for uploaded files
//!
//! Provides the MinIO/S3-compatible client uploads are handed to.

mod minio_client;

pub use minio_client::MinIOClient;
