use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::auth::guards::RequireAdmin;
use crate::features::uploads::dtos::{
    is_mime_type_allowed, UploadFileDto, UploadResponseDto, ALLOWED_MIME_TYPES,
};
use crate::features::uploads::services::UploadService;
use crate::shared::types::ApiResponse;

/// Upload a file
///
/// Accepts multipart/form-data with a single `file` field.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "JPEG, PNG, GIF, WebP or PDF file",
    ),
    responses(
        (status = 201, description = "File uploaded successfully", body = ApiResponse<UploadResponseDto>),
        (status = 400, description = "Missing file, disallowed type or file too large"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_file(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponseDto>>)> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring multipart field: {:?}", field.name());
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !is_mime_type_allowed(&content_type) {
            return Err(AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                content_type,
                ALLOWED_MIME_TYPES.join(", ")
            )));
        }

        let staged = service.stage(field).await?;
        let uploaded = service.store(staged, &content_type).await?;

        tracing::info!("Upload by user {}: {}", admin.id, uploaded.key);

        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(uploaded),
                Some("File uploaded successfully".to_string()),
                None,
            )),
        ));
    }

    Err(AppError::BadRequest("File is required".to_string()))
}
