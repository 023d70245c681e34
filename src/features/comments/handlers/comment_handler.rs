use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::comments::dtos::{
    CommentBodyDto, CommentResponseDto, CreateCommentDto, UpdateCommentDto,
};
use crate::features::comments::services::CommentService;
use crate::shared::types::{ApiResponse, Meta};

/// List comment bodies, newest first
#[utoipa::path(
    get,
    path = "/comments",
    responses(
        (status = 200, description = "Comments retrieved", body = ApiResponse<Vec<CommentBodyDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn list_comments(
    _user: AuthenticatedUser,
    State(service): State<Arc<CommentService>>,
) -> Result<Json<ApiResponse<Vec<CommentBodyDto>>>> {
    let comments = service.list().await?;
    let total = comments.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(comments),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a comment by id
#[utoipa::path(
    get,
    path = "/comments/{id}",
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment retrieved", body = ApiResponse<CommentResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Comment not found")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn get_comment(
    _user: AuthenticatedUser,
    State(service): State<Arc<CommentService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CommentResponseDto>>> {
    let comment = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(comment), None, None)))
}

/// Create a comment
#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Validation error or unknown user/news"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn create_comment(
    user: AuthenticatedUser,
    State(service): State<Arc<CommentService>>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(comment),
            Some("Comment created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a comment (author or admin)
#[utoipa::path(
    put,
    path = "/comments/{id}",
    params(("id" = i32, Path, description = "Comment id")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated successfully", body = ApiResponse<CommentResponseDto>),
        (status = 401, description = "Not the author and not an admin"),
        (status = 404, description = "Comment not found")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn update_comment(
    user: AuthenticatedUser,
    State(service): State<Arc<CommentService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateCommentDto>,
) -> Result<Json<ApiResponse<CommentResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service.update(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(comment),
        Some("Comment updated successfully".to_string()),
        None,
    )))
}

/// Delete a comment (author or admin)
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted successfully"),
        (status = 401, description = "Not the author and not an admin"),
        (status = 404, description = "Comment not found")
    ),
    tag = "comments",
    security(("bearer_auth" = []))
)]
pub async fn delete_comment(
    user: AuthenticatedUser,
    State(service): State<Arc<CommentService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&user, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Comment deleted successfully".to_string()),
        None,
    )))
}
