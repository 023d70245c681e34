//! Streaming an incoming file to the local staging directory.
//!
//! A staged file lives at `<dir>/<uuid>` until it has been handed to
//! storage. Every failure path removes whatever was written.

use axum::body::Bytes;
use futures::{pin_mut, Stream, TryStreamExt};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// A file fully written to the staging directory
#[derive(Debug)]
pub struct StagedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Write `stream` to a fresh file under `dir`, refusing more than `max_size` bytes.
pub async fn stage_stream<S, E>(dir: &Path, stream: S, max_size: usize) -> Result<StagedFile>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    E: Display,
{
    let path = dir.join(Uuid::new_v4().to_string());
    let mut file = File::create(&path).await.map_err(|e| {
        AppError::Internal(format!("Failed to create staging file {:?}: {}", path, e))
    })?;

    let written = match copy_limited(&mut file, stream, max_size).await {
        Ok(size) => file
            .flush()
            .await
            .map(|_| size)
            .map_err(|e| AppError::Internal(format!("Failed to flush staging file: {}", e))),
        Err(e) => Err(e),
    };
    drop(file);

    match written {
        Ok(size) => Ok(StagedFile { path, size }),
        Err(e) => {
            discard(&path).await;
            Err(e)
        }
    }
}

async fn copy_limited<S, E>(file: &mut File, stream: S, max_size: usize) -> Result<u64>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    E: Display,
{
    pin_mut!(stream);
    let mut size: u64 = 0;

    while let Some(chunk) = stream
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?
    {
        size += chunk.len() as u64;
        if size > max_size as u64 {
            return Err(AppError::BadRequest(format!(
                "File exceeds maximum size of {} bytes",
                max_size
            )));
        }

        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write staging file: {}", e)))?;
    }

    Ok(size)
}

/// Remove a staging file. A file that is already gone is not an error.
pub async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove staging file {:?}: {}", path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use std::convert::Infallible;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("somosmas-staging-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn test_stages_whole_stream() {
        let dir = scratch_dir();
        let chunks = stream::iter(vec![
            Ok::<_, Infallible>(Bytes::from_static(b"hello ")),
            Ok(Bytes::from_static(b"world")),
        ]);

        let staged = stage_stream(&dir, chunks, 1024).await.unwrap();
        assert_eq!(staged.size, 11);
        assert_eq!(std::fs::read(&staged.path).unwrap(), b"hello world");

        discard(&staged.path).await;
        assert_eq!(entries(&dir), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_oversized_upload_leaves_nothing_behind() {
        let dir = scratch_dir();
        let chunks = stream::iter(vec![
            Ok::<_, Infallible>(Bytes::from_static(b"12345")),
            Ok(Bytes::from_static(b"67890")),
        ]);

        let err = stage_stream(&dir, chunks, 8).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(entries(&dir), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_broken_stream_leaves_nothing_behind() {
        let dir = scratch_dir();
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err("connection reset"),
        ]);

        let err = stage_stream(&dir, chunks, 1024).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(entries(&dir), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_discard_missing_file_is_quiet() {
        let dir = scratch_dir();
        discard(&dir.join("never-written")).await;
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
