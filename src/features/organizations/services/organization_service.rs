use sqlx::PgPool;
use std::sync::Arc;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::contacts::ContactService;
use crate::features::organizations::dtos::{OrganizationResponseDto, UpdateOrganizationDto};
use crate::features::organizations::models::Organization;

/// The site is run by a single organization, seeded by the migrations
const PUBLIC_ORGANIZATION_ID: i32 = 1;

const ORGANIZATION_COLUMNS: &str = "id, name, image, address, phone, email, welcome_text, \
     about_us_text, facebook_url, linkedin_url, instagram_url, created_at, updated_at";

/// Service for the organization profile and its contact inbox
pub struct OrganizationService {
    pool: PgPool,
    contacts: Arc<ContactService>,
}

impl OrganizationService {
    pub fn new(pool: PgPool, contacts: Arc<ContactService>) -> Self {
        Self { pool, contacts }
    }

    pub async fn get_public(&self) -> Result<OrganizationResponseDto> {
        let sql = format!("SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE id = $1");
        let org: Option<Organization> = sqlx::query_as(&sql)
            .bind(PUBLIC_ORGANIZATION_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load organization"))?;

        org.map(Into::into)
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }

    pub async fn update_public(
        &self,
        dto: UpdateOrganizationDto,
    ) -> Result<OrganizationResponseDto> {
        let sql = format!(
            r#"
            UPDATE organizations
            SET name = COALESCE($2, name),
                image = COALESCE($3, image),
                address = COALESCE($4, address),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                welcome_text = COALESCE($7, welcome_text),
                about_us_text = COALESCE($8, about_us_text),
                facebook_url = COALESCE($9, facebook_url),
                linkedin_url = COALESCE($10, linkedin_url),
                instagram_url = COALESCE($11, instagram_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ORGANIZATION_COLUMNS}
            "#
        );
        let org: Option<Organization> = sqlx::query_as(&sql)
            .bind(PUBLIC_ORGANIZATION_ID)
            .bind(dto.name)
            .bind(dto.image)
            .bind(dto.address)
            .bind(dto.phone)
            .bind(dto.email)
            .bind(dto.welcome_text)
            .bind(dto.about_us_text)
            .bind(dto.facebook_url)
            .bind(dto.linkedin_url)
            .bind(dto.instagram_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update organization"))?;

        tracing::info!("Organization profile updated");

        org.map(Into::into)
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }

    /// Remove a contact submission; returns the number of rows deleted
    pub async fn delete_contact(&self, id: i32) -> Result<u64> {
        let deleted = self.contacts.delete(id).await?;
        if deleted > 0 {
            tracing::info!("Contact deleted: id={}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_deleting_a_missing_contact_reports_zero(pool: PgPool) {
        let service = OrganizationService::new(pool.clone(), Arc::new(ContactService::new(pool)));

        assert_eq!(service.delete_contact(4242).await.unwrap(), 0);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_public_organization_is_seeded(pool: PgPool) {
        let service = OrganizationService::new(pool.clone(), Arc::new(ContactService::new(pool)));

        let org = service.get_public().await.unwrap();
        assert_eq!(org.id, PUBLIC_ORGANIZATION_ID);
    }
}
