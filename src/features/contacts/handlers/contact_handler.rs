use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::contacts::dtos::{ContactCreatedDto, ContactResponseDto, CreateContactDto};
use crate::features::contacts::services::ContactService;
use crate::shared::types::{ApiResponse, Meta};

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 200, description = "Contact stored", body = ApiResponse<ContactCreatedDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<Json<ApiResponse<ContactCreatedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(ContactCreatedDto { contact }),
        Some("Contact received".to_string()),
        None,
    )))
}

/// List every contact submission
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "Contacts retrieved", body = ApiResponse<Vec<ContactResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "contacts",
    security(("bearer_auth" = []))
)]
pub async fn list_contacts(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<Vec<ContactResponseDto>>>> {
    let contacts = service.list().await?;
    let total = contacts.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(contacts),
        None,
        Some(Meta::total(total)),
    )))
}
