use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::testimonials::dtos::{
    CreateTestimonialDto, TestimonialResponseDto, UpdateTestimonialDto,
};
use crate::features::testimonials::services::TestimonialService;
use crate::shared::types::{ApiResponse, Meta};

/// List testimonials
#[utoipa::path(
    get,
    path = "/testimonials",
    responses(
        (status = 200, description = "Testimonials retrieved", body = ApiResponse<Vec<TestimonialResponseDto>>)
    ),
    tag = "testimonials"
)]
pub async fn list_testimonials(
    State(service): State<Arc<TestimonialService>>,
) -> Result<Json<ApiResponse<Vec<TestimonialResponseDto>>>> {
    let testimonials = service.list().await?;
    let total = testimonials.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(testimonials),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a testimonial by id
#[utoipa::path(
    get,
    path = "/testimonials/{id}",
    params(("id" = i32, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial retrieved", body = ApiResponse<TestimonialResponseDto>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials",
    security(("bearer_auth" = []))
)]
pub async fn get_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    let testimonial = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}

/// Create a testimonial
#[utoipa::path(
    post,
    path = "/testimonials",
    request_body = CreateTestimonialDto,
    responses(
        (status = 201, description = "Testimonial created", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "testimonials",
    security(("bearer_auth" = []))
)]
pub async fn create_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<CreateTestimonialDto>,
) -> Result<(StatusCode, Json<ApiResponse<TestimonialResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(testimonial),
            Some("Testimonial created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/testimonials/{id}",
    params(("id" = i32, Path, description = "Testimonial id")),
    request_body = UpdateTestimonialDto,
    responses(
        (status = 200, description = "Testimonial updated", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials",
    security(("bearer_auth" = []))
)]
pub async fn update_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateTestimonialDto>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(testimonial),
        Some("Testimonial updated successfully".to_string()),
        None,
    )))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/testimonials/{id}",
    params(("id" = i32, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials",
    security(("bearer_auth" = []))
)]
pub async fn delete_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Testimonial deleted successfully".to_string()),
        None,
    )))
}
