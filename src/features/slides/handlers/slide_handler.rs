use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::slides::dtos::{CreateSlideDto, SlideResponseDto, UpdateSlideDto};
use crate::features::slides::services::SlideService;
use crate::shared::types::{ApiResponse, Meta};

/// List slides in display order
#[utoipa::path(
    get,
    path = "/slides",
    responses(
        (status = 200, description = "Slides retrieved", body = ApiResponse<Vec<SlideResponseDto>>)
    ),
    tag = "slides"
)]
pub async fn list_slides(
    State(service): State<Arc<SlideService>>,
) -> Result<Json<ApiResponse<Vec<SlideResponseDto>>>> {
    let slides = service.list().await?;
    let total = slides.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(slides),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a slide by id
#[utoipa::path(
    get,
    path = "/slides/{id}",
    params(("id" = i32, Path, description = "Slide id")),
    responses(
        (status = 200, description = "Slide retrieved", body = ApiResponse<SlideResponseDto>),
        (status = 404, description = "Invalid or nonexisting slide")
    ),
    tag = "slides"
)]
pub async fn get_slide(
    State(service): State<Arc<SlideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<SlideResponseDto>>> {
    let slide = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(slide), None, None)))
}

/// Create a slide
#[utoipa::path(
    post,
    path = "/slides",
    request_body = CreateSlideDto,
    responses(
        (status = 201, description = "Slide created", body = ApiResponse<SlideResponseDto>),
        (status = 400, description = "Validation error or unknown organization")
    ),
    tag = "slides",
    security(("bearer_auth" = []))
)]
pub async fn create_slide(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SlideService>>,
    AppJson(dto): AppJson<CreateSlideDto>,
) -> Result<(StatusCode, Json<ApiResponse<SlideResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slide = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(slide),
            Some("Slide created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a slide
#[utoipa::path(
    put,
    path = "/slides/{id}",
    params(("id" = i32, Path, description = "Slide id")),
    request_body = UpdateSlideDto,
    responses(
        (status = 200, description = "Slide updated", body = ApiResponse<SlideResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Invalid or nonexisting slide")
    ),
    tag = "slides",
    security(("bearer_auth" = []))
)]
pub async fn update_slide(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SlideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateSlideDto>,
) -> Result<Json<ApiResponse<SlideResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slide = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(slide),
        Some("Slide updated successfully".to_string()),
        None,
    )))
}

/// Delete a slide
#[utoipa::path(
    delete,
    path = "/slides/{id}",
    params(("id" = i32, Path, description = "Slide id")),
    responses(
        (status = 200, description = "Slide deleted"),
        (status = 404, description = "Invalid or nonexisting slide")
    ),
    tag = "slides",
    security(("bearer_auth" = []))
)]
pub async fn delete_slide(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SlideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Slide deleted successfully".to_string()),
        None,
    )))
}
