use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the organization profile
#[derive(Debug, Clone, FromRow)]
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub welcome_text: Option<String>,
    pub about_us_text: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
