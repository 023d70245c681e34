use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for testimonial
#[derive(Debug, Clone, FromRow)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
