use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::comments::dtos::CommentResponseDto;
use crate::features::news::dtos::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::services::NewsService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List news, one page at a time
#[utoipa::path(
    get,
    path = "/news",
    params(PaginationQuery),
    responses(
        (status = 200, description = "News page retrieved", body = ApiResponse<Vec<NewsResponseDto>>)
    ),
    tag = "news"
)]
pub async fn list_news(
    State(service): State<Arc<NewsService>>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<NewsResponseDto>>>> {
    let page = service.list(&query).await?;
    let meta = page.meta();
    Ok(Json(ApiResponse::success(Some(page.items), None, Some(meta))))
}

/// Get a news item by id
#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News retrieved", body = ApiResponse<NewsResponseDto>),
        (status = 404, description = "News not found")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn get_news(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    let news = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(news), None, None)))
}

/// Create a news item
#[utoipa::path(
    post,
    path = "/news",
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "News created", body = ApiResponse<NewsResponseDto>),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn create_news(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NewsService>>,
    AppJson(dto): AppJson<CreateNewsDto>,
) -> Result<(StatusCode, Json<ApiResponse<NewsResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let news = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(news),
            Some("News created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a news item
#[utoipa::path(
    put,
    path = "/news/{id}",
    params(("id" = i32, Path, description = "News id")),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "News updated", body = ApiResponse<NewsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "News not found")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn update_news(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateNewsDto>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let news = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(news),
        Some("News updated successfully".to_string()),
        None,
    )))
}

/// Delete a news item
#[utoipa::path(
    delete,
    path = "/news/{id}",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News deleted"),
        (status = 400, description = "News still has comments"),
        (status = 404, description = "News not found")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn delete_news(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("News deleted successfully".to_string()),
        None,
    )))
}

/// List the comments of a news item, newest first
#[utoipa::path(
    get,
    path = "/news/{id}/comments",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "Comments retrieved", body = ApiResponse<Vec<CommentResponseDto>>),
        (status = 404, description = "News not found")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn list_news_comments(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<CommentResponseDto>>>> {
    let comments = service.comments(id).await?;
    let total = comments.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(comments),
        None,
        Some(Meta::total(total)),
    )))
}
