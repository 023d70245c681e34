use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::activities::dtos::{
    ActivityResponseDto, CreateActivityDto, UpdateActivityDto,
};
use crate::features::activities::services::ActivityService;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::{ApiResponse, Meta};

/// List activities
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activities retrieved", body = ApiResponse<Vec<ActivityResponseDto>>)
    ),
    tag = "activities"
)]
pub async fn list_activities(
    State(service): State<Arc<ActivityService>>,
) -> Result<Json<ApiResponse<Vec<ActivityResponseDto>>>> {
    let activities = service.list().await?;
    let total = activities.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(activities),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get an activity by id
#[utoipa::path(
    get,
    path = "/activities/{id}",
    params(("id" = i32, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity retrieved", body = ApiResponse<ActivityResponseDto>),
        (status = 404, description = "Activity not found")
    ),
    tag = "activities"
)]
pub async fn get_activity(
    State(service): State<Arc<ActivityService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<ActivityResponseDto>>> {
    let activity = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(activity), None, None)))
}

/// Create an activity
#[utoipa::path(
    post,
    path = "/activities",
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Activity created", body = ApiResponse<ActivityResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "activities",
    security(("bearer_auth" = []))
)]
pub async fn create_activity(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ActivityService>>,
    AppJson(dto): AppJson<CreateActivityDto>,
) -> Result<(StatusCode, Json<ApiResponse<ActivityResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let activity = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(activity),
            Some("Activity created successfully".to_string()),
            None,
        )),
    ))
}

/// Update an activity
#[utoipa::path(
    put,
    path = "/activities/{id}",
    params(("id" = i32, Path, description = "Activity id")),
    request_body = UpdateActivityDto,
    responses(
        (status = 200, description = "Activity updated", body = ApiResponse<ActivityResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Activity not found")
    ),
    tag = "activities",
    security(("bearer_auth" = []))
)]
pub async fn update_activity(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ActivityService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateActivityDto>,
) -> Result<Json<ApiResponse<ActivityResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let activity = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(activity),
        Some("Activity updated successfully".to_string()),
        None,
    )))
}

/// Delete an activity
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    params(("id" = i32, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    ),
    tag = "activities",
    security(("bearer_auth" = []))
)]
pub async fn delete_activity(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ActivityService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Activity deleted successfully".to_string()),
        None,
    )))
}
