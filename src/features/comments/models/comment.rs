use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a comment left on a news item
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub user_id: i32,
    pub news_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body-only projection used by the comment listing
#[derive(Debug, Clone, FromRow)]
pub struct CommentBody {
    pub body: String,
}
