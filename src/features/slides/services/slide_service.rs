use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::slides::dtos::{CreateSlideDto, SlideResponseDto, UpdateSlideDto};
use crate::features::slides::models::Slide;

const SLIDE_COLUMNS: &str =
    "id, image_url, text, position, organization_id, created_at, updated_at";

/// Service for slide operations
pub struct SlideService {
    pool: PgPool,
}

impl SlideService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Slides in display order
    pub async fn list(&self) -> Result<Vec<SlideResponseDto>> {
        let sql = format!("SELECT {SLIDE_COLUMNS} FROM slides ORDER BY position, id");
        let slides: Vec<Slide> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list slides"))?;

        Ok(slides.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<SlideResponseDto> {
        let sql = format!("SELECT {SLIDE_COLUMNS} FROM slides WHERE id = $1");
        let slide: Option<Slide> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load slide"))?;

        slide.map(Into::into).ok_or_else(not_found)
    }

    pub async fn create(&self, dto: CreateSlideDto) -> Result<SlideResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO slides (image_url, text, position, organization_id)
            VALUES (
                $1,
                $2,
                COALESCE($3, (SELECT COALESCE(MAX(position), 0) + 1 FROM slides)),
                $4
            )
            RETURNING {SLIDE_COLUMNS}
            "#
        );
        let slide: Slide = sqlx::query_as(&sql)
            .bind(&dto.image_url)
            .bind(&dto.text)
            .bind(dto.position)
            .bind(dto.organization_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create slide"))?;

        tracing::info!("Slide created: id={}, position={}", slide.id, slide.position);
        Ok(slide.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateSlideDto) -> Result<SlideResponseDto> {
        let sql = format!(
            r#"
            UPDATE slides
            SET image_url = COALESCE($2, image_url),
                text = COALESCE($3, text),
                position = COALESCE($4, position),
                organization_id = COALESCE($5, organization_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SLIDE_COLUMNS}
            "#
        );
        let slide: Option<Slide> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.image_url)
            .bind(dto.text)
            .bind(dto.position)
            .bind(dto.organization_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update slide"))?;

        slide.map(Into::into).ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM slides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete slide"))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        tracing::info!("Slide deleted: id={}", id);
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Invalid or nonexisting slide".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(text: &str) -> CreateSlideDto {
        CreateSlideDto {
            image_url: "https://img.example.com/slide.png".to_string(),
            text: Some(text.to_string()),
            position: None,
            organization_id: Some(1),
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_slides_append_in_position_order(pool: PgPool) {
        let service = SlideService::new(pool);

        let first = service.create(slide("first")).await.unwrap();
        let second = service.create(slide("second")).await.unwrap();
        assert_eq!(first.position, 1);
        assert_eq!(second.position, 2);

        let fetched = service.get(second.id).await.unwrap();
        assert_eq!(fetched.text.as_deref(), Some("second"));
        assert_eq!(fetched.image_url, second.image_url);

        let moved = UpdateSlideDto {
            image_url: None,
            text: None,
            position: Some(0),
            organization_id: None,
        };
        service.update(second.id, moved).await.unwrap();
        let ids: Vec<i32> = service.list().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_unknown_slide_is_not_found(pool: PgPool) {
        let service = SlideService::new(pool);
        let no_changes = || UpdateSlideDto {
            image_url: None,
            text: None,
            position: None,
            organization_id: None,
        };

        match service.get(999).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Invalid or nonexisting slide"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            service.update(999, no_changes()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
