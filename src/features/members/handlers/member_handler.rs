use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::members::dtos::{
    CreateMemberDto, MemberCreatedDto, MemberResponseDto, UpdateMemberDto,
};
use crate::features::members::services::MemberService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List members, one page at a time
///
/// A page past the end comes back empty with the real total in `meta`.
#[utoipa::path(
    get,
    path = "/members",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Members page retrieved", body = ApiResponse<Vec<MemberResponseDto>>)
    ),
    tag = "members"
)]
pub async fn list_members(
    State(service): State<Arc<MemberService>>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MemberResponseDto>>>> {
    let page = service.list(&query).await?;
    let meta = page.meta();
    Ok(Json(ApiResponse::success(Some(page.items), None, Some(meta))))
}

/// Get a member by id
#[utoipa::path(
    get,
    path = "/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member retrieved", body = ApiResponse<MemberResponseDto>),
        (status = 404, description = "Member not found")
    ),
    tag = "members",
    security(("bearer_auth" = []))
)]
pub async fn get_member(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MemberService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    let member = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(member), None, None)))
}

/// Create a member
#[utoipa::path(
    post,
    path = "/members",
    request_body = CreateMemberDto,
    responses(
        (status = 200, description = "Member created", body = ApiResponse<MemberCreatedDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "members",
    security(("bearer_auth" = []))
)]
pub async fn create_member(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MemberService>>,
    AppJson(dto): AppJson<CreateMemberDto>,
) -> Result<Json<ApiResponse<MemberCreatedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(MemberCreatedDto { member }),
        Some("Member created successfully".to_string()),
        None,
    )))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated successfully", body = ApiResponse<MemberResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Member does not exist")
    ),
    tag = "members",
    security(("bearer_auth" = []))
)]
pub async fn update_member(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MemberService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateMemberDto>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(member),
        Some("Member updated successfully".to_string()),
        None,
    )))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member deleted"),
        (status = 404, description = "Member does not exist")
    ),
    tag = "members",
    security(("bearer_auth" = []))
)]
pub async fn delete_member(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MemberService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Member deleted successfully".to_string()),
        None,
    )))
}
