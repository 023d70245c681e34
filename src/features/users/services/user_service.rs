use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::policy::{authorize, Capability, ResourceOwner};
use crate::features::users::dtos::{UpdateUserDto, UserResponseDto};
use crate::features::users::models::{User, USER_COLUMNS};

/// Service for user account operations
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let users: Vec<User> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list users"))?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<UserResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// Update the profile of `id`; only the owner or an admin may do so
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: i32,
        dto: UpdateUserDto,
    ) -> Result<UserResponseDto> {
        let user = self.find(id).await?;
        authorize(
            actor,
            ResourceOwner { email: &user.email },
            Capability::Edit,
        )?;

        let sql = format!(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                image = COALESCE($4, image),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );
        let updated: User = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.first_name)
            .bind(dto.last_name)
            .bind(dto.image)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update user"))?;

        tracing::info!("User {} updated by {}", id, actor.id);
        Ok(updated.into())
    }

    /// Delete the account `id`; only the owner or an admin may do so
    pub async fn delete(&self, actor: &AuthenticatedUser, id: i32) -> Result<()> {
        let user = self.find(id).await?;
        authorize(
            actor,
            ResourceOwner { email: &user.email },
            Capability::Delete,
        )?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete user"))?;

        tracing::info!("User {} deleted by {}", id, actor.id);
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load user"))?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, create_standard_user};

    async fn insert_user(pool: &PgPool, email: &str) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO users (first_name, last_name, email, password_hash, role_id) \
             VALUES ('Ana', 'Gómez', $1, 'x', 2) RETURNING id",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn rename(first_name: &str) -> UpdateUserDto {
        UpdateUserDto {
            first_name: Some(first_name.to_string()),
            last_name: None,
            image: None,
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_only_owner_or_admin_may_change_a_user(pool: PgPool) {
        let id = insert_user(&pool, "ana@example.com").await;
        let service = UserService::new(pool);
        let stranger = create_standard_user(id + 1, "stranger@example.com");

        assert!(matches!(
            service.update(&stranger, id, rename("Hacked")).await,
            Err(AppError::Unauthorized(_))
        ));
        assert_eq!(service.get(id).await.unwrap().first_name, "Ana");

        assert!(matches!(
            service.delete(&stranger, id).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(service.get(id).await.is_ok());

        let owner = create_standard_user(id, "ana@example.com");
        let updated = service.update(&owner, id, rename("Anita")).await.unwrap();
        assert_eq!(updated.first_name, "Anita");
        assert_eq!(updated.last_name, "Gómez");

        service.delete(&create_admin_user(), id).await.unwrap();
        assert!(matches!(service.get(id).await, Err(AppError::NotFound(_))));
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_unknown_user_is_not_found(pool: PgPool) {
        let service = UserService::new(pool);
        let admin = create_admin_user();

        assert!(matches!(service.get(999).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update(&admin, 999, rename("x")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(&admin, 999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
