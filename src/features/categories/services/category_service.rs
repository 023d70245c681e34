use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryNameDto, CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryName};

const CATEGORY_COLUMNS: &str = "id, name, description, image, created_at, updated_at";

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List category names
    pub async fn list(&self) -> Result<Vec<CategoryNameDto>> {
        let categories: Vec<CategoryName> =
            sqlx::query_as("SELECT name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_db_error(e, "Failed to list categories"))?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CategoryResponseDto> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        let category: Option<Category> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load category"))?;

        category.map(Into::into).ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO categories (name, description, image)
            VALUES ($1, $2, $3)
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        let category: Category = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.image)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create category"))?;

        tracing::info!("Category created: id={}", category.id);
        Ok(category.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let sql = format!(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        let category: Option<Category> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.name)
            .bind(dto.description)
            .bind(dto.image)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update category"))?;

        category.map(Into::into).ok_or_else(|| not_found(id))
    }

    /// Delete a category; refused while news items still point at it
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete category"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Category {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_changes() -> UpdateCategoryDto {
        UpdateCategoryDto {
            name: None,
            description: None,
            image: None,
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_created_category_reads_back(pool: PgPool) {
        let service = CategoryService::new(pool);
        let created = service
            .create(CreateCategoryDto {
                name: "Eventos".to_string(),
                description: Some("Agenda de la ONG".to_string()),
                image: None,
            })
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Eventos");
        assert_eq!(fetched.description, created.description);

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Eventos".to_string()]);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_unknown_category_is_not_found(pool: PgPool) {
        let service = CategoryService::new(pool);

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
