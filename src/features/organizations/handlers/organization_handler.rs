use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::organizations::dtos::{
    DeleteCountDto, OrganizationResponseDto, UpdateOrganizationDto,
};
use crate::features::organizations::services::OrganizationService;
use crate::shared::types::ApiResponse;

/// Public organization profile
#[utoipa::path(
    get,
    path = "/organization/public",
    responses(
        (status = 200, description = "Organization retrieved", body = ApiResponse<OrganizationResponseDto>),
        (status = 404, description = "Organization not found")
    ),
    tag = "organization"
)]
pub async fn get_public_organization(
    State(service): State<Arc<OrganizationService>>,
) -> Result<Json<ApiResponse<OrganizationResponseDto>>> {
    let org = service.get_public().await?;
    Ok(Json(ApiResponse::success(Some(org), None, None)))
}

/// Update the public organization profile
#[utoipa::path(
    put,
    path = "/organization/public",
    request_body = UpdateOrganizationDto,
    responses(
        (status = 200, description = "Organization updated", body = ApiResponse<OrganizationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "organization",
    security(("bearer_auth" = []))
)]
pub async fn update_public_organization(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<OrganizationService>>,
    AppJson(dto): AppJson<UpdateOrganizationDto>,
) -> Result<Json<ApiResponse<OrganizationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let org = service.update_public(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(org),
        Some("Organization updated successfully".to_string()),
        None,
    )))
}

/// Delete a contact submission
///
/// Answers 404 with `{ "response": 0 }` when no contact had that id.
#[utoipa::path(
    delete,
    path = "/organization/contacts/{id}",
    params(("id" = i32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact deleted", body = ApiResponse<DeleteCountDto>),
        (status = 404, description = "Contact not found", body = ApiResponse<DeleteCountDto>)
    ),
    tag = "organization",
    security(("bearer_auth" = []))
)]
pub async fn delete_contact(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<OrganizationService>>,
    AppPath(id): AppPath<i32>,
) -> Result<(StatusCode, Json<ApiResponse<DeleteCountDto>>)> {
    let deleted = service.delete_contact(id).await?;
    let body = DeleteCountDto { response: deleted };

    if deleted == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: Some(body),
                message: Some(format!("Contact {} not found", id)),
                meta: None,
                errors: None,
            }),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            Some(body),
            Some("Contact deleted successfully".to_string()),
            None,
        )),
    ))
}
