use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::shared::pagination::Paginate;

pub const MEMBER_COLUMNS: &str = "id, name, facebook_url, instagram_url, linkedin_url, image, \
     description, created_at, updated_at";

/// Database model for an organization member
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Paginate for Member {
    const TABLE: &'static str = "members";
    const COLUMNS: &'static str = MEMBER_COLUMNS;
}
