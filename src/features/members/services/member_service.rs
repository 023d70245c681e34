use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::members::dtos::{CreateMemberDto, MemberResponseDto, UpdateMemberDto};
use crate::features::members::models::{Member, MEMBER_COLUMNS};
use crate::shared::pagination::{find_and_paginate, Page};
use crate::shared::types::PaginationQuery;

/// Service for member operations
pub struct MemberService {
    pool: PgPool,
}

impl MemberService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &PaginationQuery) -> Result<Page<MemberResponseDto>> {
        let page = find_and_paginate::<Member>(&self.pool, query)
            .await
            .map_err(|e| map_db_error(e, "Failed to list members"))?;

        Ok(page.map(Into::into))
    }

    pub async fn get(&self, id: i32) -> Result<MemberResponseDto> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1");
        let member: Option<Member> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load member"))?;

        member.map(Into::into).ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: CreateMemberDto) -> Result<MemberResponseDto> {
        let sql = format!(
            r#"
            INSERT INTO members (name, facebook_url, instagram_url, linkedin_url, image, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MEMBER_COLUMNS}
            "#
        );
        let member: Member = sqlx::query_as(&sql)
            .bind(&dto.name)
            .bind(&dto.facebook_url)
            .bind(&dto.instagram_url)
            .bind(&dto.linkedin_url)
            .bind(&dto.image)
            .bind(&dto.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to create member"))?;

        tracing::info!("Member created: id={}", member.id);
        Ok(member.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateMemberDto) -> Result<MemberResponseDto> {
        let sql = format!(
            r#"
            UPDATE members
            SET name = COALESCE($2, name),
                facebook_url = COALESCE($3, facebook_url),
                instagram_url = COALESCE($4, instagram_url),
                linkedin_url = COALESCE($5, linkedin_url),
                image = COALESCE($6, image),
                description = COALESCE($7, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        );
        let member: Option<Member> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.name)
            .bind(dto.facebook_url)
            .bind(dto.instagram_url)
            .bind(dto.linkedin_url)
            .bind(dto.image)
            .bind(dto.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update member"))?;

        member.map(Into::into).ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete member"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Member deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Member {} does not exist", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn fake_member() -> CreateMemberDto {
        CreateMemberDto {
            name: Name().fake(),
            facebook_url: None,
            instagram_url: None,
            linkedin_url: None,
            image: None,
            description: Some(Sentence(2..6).fake()),
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_member_pages_are_offset_windows(pool: PgPool) {
        let service = MemberService::new(pool);
        for _ in 0..12 {
            service.create(fake_member()).await.unwrap();
        }

        let query = |page| PaginationQuery {
            page,
            page_size: 10,
        };

        let first = service.list(&query(1)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 12);
        assert_eq!(first.total_pages(), 2);

        let second = service.list(&query(2)).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(second.items[0].id > first.items[9].id);

        let beyond = service.list(&query(5)).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 12);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_missing_member_is_not_found(pool: PgPool) {
        let service = MemberService::new(pool);

        assert!(matches!(service.get(999).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete(999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
