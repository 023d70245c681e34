use sqlx::PgPool;
use std::sync::Arc;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::comments::dtos::CommentResponseDto;
use crate::features::comments::CommentService;
use crate::features::news::dtos::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::models::{News, NEWS_COLUMNS};
use crate::shared::pagination::{find_and_paginate, Page};
use crate::shared::types::PaginationQuery;

/// Service for news operations
pub struct NewsService {
    pool: PgPool,
    comments: Arc<CommentService>,
}

impl NewsService {
    pub fn new(pool: PgPool, comments: Arc<CommentService>) -> Self {
        Self { pool, comments }
    }

    pub async fn list(&self, query: &PaginationQuery) -> Result<Page<NewsResponseDto>> {
        let page = find_and_paginate::<News>(&self.pool, query)
            .await
            .map_err(|e| map_db_error(e, "Failed to list news"))?;

        Ok(page.map(Into::into))
    }

    pub async fn get(&self, id: i32) -> Result<NewsResponseDto> {
        self.find(id).await.map(Into::into)
    }

    pub async fn create(&self, dto: CreateNewsDto) -> Result<NewsResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO news (name, image, content, category_id, type)
            VALUES ($1, $2, $3, $4, COALESCE($5, 'news'))
            RETURNING {NEWS_COLUMNS}
            "#
        );
        let news: News = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.image)
            .bind(&dto.content)
            .bind(dto.category_id)
            .bind(&dto.news_type)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create news"))?;

        tracing::info!("News created: id={}", news.id);
        Ok(news.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateNewsDto) -> Result<NewsResponseDto> {
        let sql = format!(
            r#"
            UPDATE news
            SET name = COALESCE($2, name),
                image = COALESCE($3, image),
                content = COALESCE($4, content),
                category_id = COALESCE($5, category_id),
                type = COALESCE($6, type),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {NEWS_COLUMNS}
            "#
        );
        let news: Option<News> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.name)
            .bind(dto.image)
            .bind(dto.content)
            .bind(dto.category_id)
            .bind(dto.news_type)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update news"))?;

        news.map(Into::into).ok_or_else(|| not_found(id))
    }

    /// Delete a news item; refused while comments still point at it
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match map_db_error(e, "Failed to delete news") {
                AppError::BadRequest(_) => {
                    AppError::BadRequest(format!("News {} still has comments", id))
                }
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("News deleted: id={}", id);
        Ok(())
    }

    /// Comments on news item `id`, newest first; 404 when the item is gone
    pub async fn comments(&self, id: i32) -> Result<Vec<CommentResponseDto>> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM news WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load news"))?;

        if !exists {
            return Err(not_found(id));
        }

        self.comments.list_by_news(id).await
    }

    async fn find(&self, id: i32) -> Result<News> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load news"))?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("News {} not found", id))
}
