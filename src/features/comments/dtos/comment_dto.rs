use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::comments::models::{Comment, CommentBody};

/// Comment as returned to clients.
///
/// `user_id` and `news_id` keep their snake_case names on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseDto {
    pub id: i32,
    pub body: String,
    #[serde(rename = "user_id")]
    pub user_id: i32,
    #[serde(rename = "news_id")]
    pub news_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponseDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            body: c.body,
            user_id: c.user_id,
            news_id: c.news_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentBodyDto {
    pub body: String,
}

impl From<CommentBody> for CommentBodyDto {
    fn from(c: CommentBody) -> Self {
        Self { body: c.body }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, max = 5000, message = "Body must be 1-5000 characters"))]
    pub body: String,

    /// Honoured for admins only; other callers comment as themselves
    #[validate(range(min = 1, message = "Invalid user_id"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "Invalid news_id"))]
    pub news_id: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentDto {
    #[validate(length(min = 1, max = 5000, message = "Body must be 1-5000 characters"))]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_keys_stay_snake_case() {
        let now = Utc::now();
        let dto: CommentResponseDto = Comment {
            id: 1,
            body: "Muy bueno".to_string(),
            user_id: 4,
            news_id: 9,
            created_at: now,
            updated_at: now,
        }
        .into();

        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["user_id"], 4);
        assert_eq!(value["news_id"], 9);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("userId").is_none());
    }

    #[test]
    fn test_create_reads_snake_case_body() {
        let dto: CreateCommentDto = serde_json::from_value(serde_json::json!({
            "body": "Hola",
            "user_id": 3,
            "news_id": 5,
            "id": 100
        }))
        .unwrap();
        assert_eq!(dto.user_id, 3);
        assert_eq!(dto.news_id, 5);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_empty_body() {
        let dto = CreateCommentDto {
            body: String::new(),
            user_id: 1,
            news_id: 1,
        };
        assert!(dto.validate().is_err());
    }
}
