use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::activities::dtos::{
    ActivityResponseDto, CreateActivityDto, UpdateActivityDto,
};
use crate::features::activities::models::Activity;

const ACTIVITY_COLUMNS: &str = "id, name, image, content, created_at, updated_at";

/// Service for activity operations
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ActivityResponseDto>> {
        let sql = format!("SELECT {ACTIVITY_COLUMNS} FROM activities ORDER BY id");
        let activities: Vec<Activity> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list activities"))?;

        Ok(activities.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<ActivityResponseDto> {
        let sql = format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = $1");
        let activity: Option<Activity> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load activity"))?;

        activity.map(Into::into).ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: CreateActivityDto) -> Result<ActivityResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO activities (name, image, content)
            VALUES ($1, $2, $3)
            RETURNING {ACTIVITY_COLUMNS}
            "#
        );
        let activity: Activity = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.image)
            .bind(&dto.content)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create activity"))?;

        tracing::info!("Activity created: id={}", activity.id);
        Ok(activity.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateActivityDto) -> Result<ActivityResponseDto> {
        let sql = format!(
            r#"
            UPDATE activities
            SET name = COALESCE($2, name),
                image = COALESCE($3, image),
                content = COALESCE($4, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ACTIVITY_COLUMNS}
            "#
        );
        let activity: Option<Activity> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.name)
            .bind(dto.image)
            .bind(dto.content)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update activity"))?;

        activity.map(Into::into).ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete activity"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Activity deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Activity {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::Fake;

    fn no_changes() -> UpdateActivityDto {
        UpdateActivityDto {
            name: None,
            image: None,
            content: None,
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_created_activity_reads_back(pool: PgPool) {
        let service = ActivityService::new(pool);
        let dto = CreateActivityDto {
            name: Sentence(2..4).fake(),
            image: None,
            content: Paragraph(1..2).fake(),
        };
        let name = dto.name.clone();

        let created = service.create(dto).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, name);
        assert_eq!(fetched.content, created.content);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_unknown_activity_is_not_found(pool: PgPool) {
        let service = ActivityService::new(pool);

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
