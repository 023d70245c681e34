use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::Result;
use crate::features::contacts::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contacts::models::Contact;

const CONTACT_COLUMNS: &str = "id, name, phone, email, message, created_at, updated_at";

/// Service for contact form submissions
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateContactDto) -> Result<ContactResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO contacts (name, phone, email, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {CONTACT_COLUMNS}
            "#
        );
        let contact: Contact = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.phone)
            .bind(&dto.email)
            .bind(&dto.message)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create contact"))?;

        tracing::info!("Contact received: id={}", contact.id);
        Ok(contact.into())
    }

    pub async fn list(&self) -> Result<Vec<ContactResponseDto>> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id");
        let contacts: Vec<Contact> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list contacts"))?;

        Ok(contacts.into_iter().map(Into::into).collect())
    }

    /// Delete a contact, returning how many rows went away (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete contact"))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn fake_contact() -> CreateContactDto {
        CreateContactDto {
            name: Name().fake(),
            phone: None,
            email: SafeEmail().fake(),
            message: Sentence(3..8).fake(),
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_contact_is_stored_listed_and_deleted(pool: PgPool) {
        let service = ContactService::new(pool);
        let dto = fake_contact();
        let email = dto.email.clone();

        let created = service.create(dto).await.unwrap();
        assert_eq!(created.email, email);

        let listed = service.list().await.unwrap();
        assert!(listed.iter().any(|c| c.id == created.id));

        assert_eq!(service.delete(created.id).await.unwrap(), 1);
        assert_eq!(service.delete(created.id).await.unwrap(), 0);
        assert!(service.list().await.unwrap().is_empty());
    }
}
