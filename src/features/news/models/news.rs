use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::shared::pagination::Paginate;

pub const NEWS_COLUMNS: &str =
    "id, name, image, content, category_id, type, created_at, updated_at";

/// Database model for a news item
#[derive(Debug, Clone, FromRow)]
pub struct News {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub content: String,
    pub category_id: Option<i32>,
    #[sqlx(rename = "type")]
    pub news_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Paginate for News {
    const TABLE: &'static str = "news";
    const COLUMNS: &'static str = NEWS_COLUMNS;
}
