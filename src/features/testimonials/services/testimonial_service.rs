use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::testimonials::dtos::{
    CreateTestimonialDto, TestimonialResponseDto, UpdateTestimonialDto,
};
use crate::features::testimonials::models::Testimonial;

const TESTIMONIAL_COLUMNS: &str = "id, name, image, content, created_at, updated_at";

/// Service for testimonial operations
pub struct TestimonialService {
    pool: PgPool,
}

impl TestimonialService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TestimonialResponseDto>> {
        let sql = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials ORDER BY id");
        let testimonials: Vec<Testimonial> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list testimonials"))?;

        Ok(testimonials.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<TestimonialResponseDto> {
        let sql = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE id = $1");
        let testimonial: Option<Testimonial> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load testimonial"))?;

        testimonial
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: CreateTestimonialDto) -> Result<TestimonialResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO testimonials (name, image, content)
            VALUES ($1, $2, $3)
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        );
        let testimonial: Testimonial = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.image)
            .bind(&dto.content)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create testimonial"))?;

        tracing::info!("Testimonial created: id={}", testimonial.id);
        Ok(testimonial.into())
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateTestimonialDto,
    ) -> Result<TestimonialResponseDto> {
        let sql = format!(
            r#"
            UPDATE testimonials
            SET name = COALESCE($2, name),
                image = COALESCE($3, image),
                content = COALESCE($4, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        );
        let testimonial: Option<Testimonial> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.name)
            .bind(dto.image)
            .bind(dto.content)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update testimonial"))?;

        testimonial
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete testimonial"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Testimonial deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Testimonial {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn no_changes() -> UpdateTestimonialDto {
        UpdateTestimonialDto {
            name: None,
            image: None,
            content: None,
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_created_testimonial_reads_back(pool: PgPool) {
        let service = TestimonialService::new(pool);
        let dto = CreateTestimonialDto {
            name: Name().fake(),
            image: "https://img.example.com/t.png".to_string(),
            content: Sentence(4..10).fake(),
        };
        let name = dto.name.clone();

        let created = service.create(dto).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, name);
        assert_eq!(fetched.content, created.content);

        let edit = UpdateTestimonialDto {
            content: Some("Gracias".to_string()),
            ..no_changes()
        };
        let updated = service.update(created.id, edit).await.unwrap();
        assert_eq!(updated.content.as_deref(), Some("Gracias"));
        assert_eq!(updated.name, name);

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_unknown_testimonial_is_not_found(pool: PgPool) {
        let service = TestimonialService::new(pool);

        assert!(matches!(service.get(999).await, Err(AppError::NotFound(_))));
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
