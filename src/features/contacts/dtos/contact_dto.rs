use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::contacts::models::Contact;
use crate::shared::validation::PHONE_REGEX;

/// Public contact form body. Unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(max = 50, message = "Phone must be at most 50 characters"),
        regex(path = *PHONE_REGEX, message = "Invalid phone number")
    )]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseDto {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponseDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone: c.phone,
            email: c.email,
            message: c.message,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// `data` of a successful contact submission: `{ "contact": { ... } }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactCreatedDto {
    pub contact: ContactResponseDto,
}
