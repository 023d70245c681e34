use axum::body::Bytes;
use futures::Stream;
use std::fmt::Display;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{extension_for, UploadResponseDto};
use crate::features::uploads::services::staging::{discard, stage_stream, StagedFile};
use crate::modules::storage::MinIOClient;

/// Stages uploads on local disk and hands them to object storage
pub struct UploadService {
    storage: Arc<MinIOClient>,
    config: UploadConfig,
}

impl UploadService {
    pub fn new(storage: Arc<MinIOClient>, config: UploadConfig) -> Self {
        Self { storage, config }
    }

    pub fn max_file_size(&self) -> usize {
        self.config.max_file_size
    }

    /// Stream an incoming file into the staging directory
    pub async fn stage<S, E>(&self, stream: S) -> Result<StagedFile>
    where
        S: Stream<Item = std::result::Result<Bytes, E>>,
        E: Display,
    {
        stage_stream(&self.config.temp_dir, stream, self.config.max_file_size).await
    }

    /// Push a staged file to storage. The staging file is removed whether
    /// or not the upload succeeds.
    pub async fn store(&self, staged: StagedFile, content_type: &str) -> Result<UploadResponseDto> {
        let result = self.push_to_storage(&staged, content_type).await;
        discard(&staged.path).await;
        result
    }

    async fn push_to_storage(
        &self,
        staged: &StagedFile,
        content_type: &str,
    ) -> Result<UploadResponseDto> {
        let data = tokio::fs::read(&staged.path)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read staging file: {}", e)))?;

        let extension = extension_for(content_type).unwrap_or("bin");
        let key = self
            .storage
            .generate_key(&format!("{}.{}", Uuid::now_v7(), extension));

        self.storage.upload(&key, &data, content_type).await?;

        tracing::info!("File stored: key={}, size={}", key, staged.size);

        Ok(UploadResponseDto {
            url: self.storage.get_file_url(&key),
            key,
            content_type: content_type.to_string(),
            size: staged.size,
        })
    }
}
