use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a home page carousel slide
#[derive(Debug, Clone, FromRow)]
pub struct Slide {
    pub id: i32,
    pub image_url: String,
    pub text: Option<String>,
    pub position: i32,
    pub organization_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
