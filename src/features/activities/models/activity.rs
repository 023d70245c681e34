use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for activity
#[derive(Debug, Clone, FromRow)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
