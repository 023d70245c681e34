use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::policy::{authorize, Capability, ResourceOwner};
use crate::features::comments::dtos::{
    CommentBodyDto, CommentResponseDto, CreateCommentDto, UpdateCommentDto,
};
use crate::features::comments::models::{Comment, CommentBody};

const COMMENT_COLUMNS: &str = "id, body, user_id, news_id, created_at, updated_at";

/// Service for comment operations
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Comment bodies, newest first
    pub async fn list(&self) -> Result<Vec<CommentBodyDto>> {
        let comments: Vec<CommentBody> =
            sqlx::query_as("SELECT body FROM comments ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_db_error(e, "Failed to list comments"))?;

        Ok(comments.into_iter().map(Into::into).collect())
    }

    /// Comments of one news item, newest first
    pub async fn list_by_news(&self, news_id: i32) -> Result<Vec<CommentResponseDto>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE news_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let comments: Vec<Comment> = sqlx::query_as(&sql)
            .bind(news_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list news comments"))?;

        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CommentResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// Post a comment. Only admins may post on behalf of another user;
    /// anyone else is recorded as the author whatever `user_id` says.
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        dto: CreateCommentDto,
    ) -> Result<CommentResponseDto> {
        let author_id = if actor.is_admin() { dto.user_id } else { actor.id };

        let sql = format!(
            r#"
            INSERT INTO comments (body, user_id, news_id)
            VALUES ($1, $2, $3)
            RETURNING {COMMENT_COLUMNS}
            "#
        );
        let comment: Comment = sqlx::query_as(&sql)
            .bind(&dto.body)
            .bind(author_id)
            .bind(dto.news_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match map_db_error(e, "Failed to create comment") {
                AppError::BadRequest(_) => {
                    AppError::BadRequest("Unknown user_id or news_id".to_string())
                }
                other => other,
            })?;

        tracing::info!(
            "Comment created: id={}, news_id={}",
            comment.id,
            comment.news_id
        );
        Ok(comment.into())
    }

    /// Edit a comment's body; the author or an admin only
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: i32,
        dto: UpdateCommentDto,
    ) -> Result<CommentResponseDto> {
        let comment = self.find(id).await?;
        let owner_email = self.owner_email(&comment).await?;
        authorize(
            actor,
            ResourceOwner {
                email: &owner_email,
            },
            Capability::Edit,
        )?;

        let sql = format!(
            r#"
            UPDATE comments
            SET body = COALESCE($2, body),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COMMENT_COLUMNS}
            "#
        );
        let updated: Option<Comment> = sqlx::query_as(&sql)
            .bind(id)
            .bind(dto.body)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to update comment"))?;

        updated.map(Into::into).ok_or_else(|| not_found(id))
    }

    /// Delete a comment; the author or an admin only
    pub async fn delete(&self, actor: &AuthenticatedUser, id: i32) -> Result<()> {
        let comment = self.find(id).await?;
        let owner_email = self.owner_email(&comment).await?;
        authorize(
            actor,
            ResourceOwner {
                email: &owner_email,
            },
            Capability::Delete,
        )?;

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete comment"))?;

        tracing::info!("Comment {} deleted by user {}", id, actor.id);
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Comment> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load comment"))?
            .ok_or_else(|| not_found(id))
    }

    async fn owner_email(&self, comment: &Comment) -> Result<String> {
        sqlx::query_scalar("SELECT email FROM users WHERE id = $1")
            .bind(comment.user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load comment owner"))?
            .ok_or_else(|| {
                AppError::NotFound(format!("Author of comment {} not found", comment.id))
            })
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Comment {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, create_standard_user};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    async fn insert_user(pool: &PgPool, email: &str) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO users (first_name, last_name, email, password_hash, role_id) \
             VALUES ('Test', 'User', $1, 'x', 2) RETURNING id",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn insert_news(pool: &PgPool) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO news (name, image, content) VALUES ('Title', 'img.png', 'Body') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_only_author_or_admin_may_change_a_comment(pool: PgPool) {
        let owner_email: String = SafeEmail().fake();
        let owner_id = insert_user(&pool, &owner_email).await;
        let news_id = insert_news(&pool).await;
        let service = CommentService::new(pool);

        let comment = service
            .create(&create_admin_user(), CreateCommentDto {
                body: Sentence(3..6).fake(),
                user_id: owner_id,
                news_id,
            })
            .await
            .unwrap();

        let stranger = create_standard_user(owner_id + 1, "stranger@example.com");
        let edit = UpdateCommentDto {
            body: Some("hijacked".to_string()),
        };
        assert!(matches!(
            service.update(&stranger, comment.id, edit).await,
            Err(AppError::Unauthorized(_))
        ));
        assert_eq!(service.get(comment.id).await.unwrap().body, comment.body);

        assert!(matches!(
            service.delete(&stranger, comment.id).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(service.get(comment.id).await.is_ok());

        let owner = create_standard_user(owner_id, &owner_email);
        let edit = UpdateCommentDto {
            body: Some("edited by owner".to_string()),
        };
        let updated = service.update(&owner, comment.id, edit).await.unwrap();
        assert_eq!(updated.body, "edited by owner");

        service.delete(&create_admin_user(), comment.id).await.unwrap();
        assert!(matches!(
            service.get(comment.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_comment_on_unknown_news_is_rejected(pool: PgPool) {
        let user_id = insert_user(&pool, "someone@example.com").await;
        let service = CommentService::new(pool);

        let author = create_standard_user(user_id, "someone@example.com");
        let result = service
            .create(&author, CreateCommentDto {
                body: "hola".to_string(),
                user_id,
                news_id: 9999,
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_standard_user_always_comments_as_themselves(pool: PgPool) {
        let author_id = insert_user(&pool, "autora@example.com").await;
        let victim_id = insert_user(&pool, "otra@example.com").await;
        let news_id = insert_news(&pool).await;
        let service = CommentService::new(pool);

        let author = create_standard_user(author_id, "autora@example.com");
        let comment = service
            .create(&author, CreateCommentDto {
                body: Sentence(3..6).fake(),
                user_id: victim_id,
                news_id,
            })
            .await
            .unwrap();
        assert_eq!(comment.user_id, author_id);

        let on_behalf = service
            .create(&create_admin_user(), CreateCommentDto {
                body: Sentence(3..6).fake(),
                user_id: victim_id,
                news_id,
            })
            .await
            .unwrap();
        assert_eq!(on_behalf.user_id, victim_id);
    }
}
