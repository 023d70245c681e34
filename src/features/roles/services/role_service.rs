use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::roles::dtos::{CreateRoleDto, RoleResponseDto, UpdateRoleDto};
use crate::features::roles::models::Role;

const ROLE_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Service for role operations
pub struct RoleService {
    pool: PgPool,
}

impl RoleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RoleResponseDto>> {
        let sql = format!("SELECT {ROLE_COLUMNS} FROM roles ORDER BY id");
        let roles: Vec<Role> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list roles"))?;

        Ok(roles.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<RoleResponseDto> {
        let sql = format!("SELECT {ROLE_COLUMNS} FROM roles WHERE id = $1");
        let role: Option<Role> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load role"))?;

        role.map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))
    }

    pub async fn create(&self, dto: CreateRoleDto) -> Result<RoleResponseDto> {
        let sql = format!(
            "INSERT INTO roles (name, description) VALUES ($1, $2) RETURNING {ROLE_COLUMNS}"
        );
        let role: Role = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create role"))?;

        tracing::info!("Role created: id={}, name={}", role.id, role.name);
        Ok(role.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateRoleDto) -> Result<RoleResponseDto> {
        let sql = format!(
            r#"
            UPDATE roles
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ROLE_COLUMNS}
            "#
        );
        let role: Option<Role> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update role"))?;

        role.map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))
    }

    /// Delete a role; refused while any user still holds it
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match map_db_error(e, "Failed to delete role") {
                AppError::BadRequest(_) => {
                    AppError::BadRequest(format!("Role {} is still assigned to users", id))
                }
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Role {} not found", id)));
        }

        tracing::info!("Role deleted: id={}", id);
        Ok(())
    }
}
