use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::roles::dtos::{CreateRoleDto, RoleResponseDto, UpdateRoleDto};
use crate::features::roles::services::RoleService;
use crate::shared::types::{ApiResponse, Meta};

/// List roles
#[utoipa::path(
    get,
    path = "/roles",
    responses(
        (status = 200, description = "Roles retrieved", body = ApiResponse<Vec<RoleResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "roles",
    security(("bearer_auth" = []))
)]
pub async fn list_roles(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RoleService>>,
) -> Result<Json<ApiResponse<Vec<RoleResponseDto>>>> {
    let roles = service.list().await?;
    let total = roles.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(roles),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a role by id
#[utoipa::path(
    get,
    path = "/roles/{id}",
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role retrieved", body = ApiResponse<RoleResponseDto>),
        (status = 404, description = "Role not found")
    ),
    tag = "roles",
    security(("bearer_auth" = []))
)]
pub async fn get_role(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RoleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<RoleResponseDto>>> {
    let role = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(role), None, None)))
}

/// Create a role
#[utoipa::path(
    post,
    path = "/roles",
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Role name already exists")
    ),
    tag = "roles",
    security(("bearer_auth" = []))
)]
pub async fn create_role(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RoleService>>,
    AppJson(dto): AppJson<CreateRoleDto>,
) -> Result<(StatusCode, Json<ApiResponse<RoleResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let role = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(role),
            Some("Role created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a role
#[utoipa::path(
    put,
    path = "/roles/{id}",
    params(("id" = i32, Path, description = "Role id")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<RoleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found"),
        (status = 409, description = "Role name already exists")
    ),
    tag = "roles",
    security(("bearer_auth" = []))
)]
pub async fn update_role(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RoleService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<Json<ApiResponse<RoleResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let role = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(role),
        Some("Role updated successfully".to_string()),
        None,
    )))
}

/// Delete a role
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role deleted"),
        (status = 400, description = "Role still assigned to users"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles",
    security(("bearer_auth" = []))
)]
pub async fn delete_role(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RoleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Role deleted successfully".to_string()),
        None,
    )))
}
