use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a contact form submission
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
