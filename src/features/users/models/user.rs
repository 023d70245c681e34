use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Column list shared by every query that loads a full [`User`]
pub const USER_COLUMNS: &str =
    "id, first_name, last_name, email, password_hash, image, role_id, created_at, updated_at";

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub image: Option<String>,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
