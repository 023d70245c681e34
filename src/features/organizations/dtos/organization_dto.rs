use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::organizations::models::Organization;
use crate::shared::validation::PHONE_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponseDto {
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

impl From<Organization> for OrganizationResponseDto {
    fn from(o: Organization) -> Self {
        Self {
            id: o.id,
            name: o.name,
            image: o.image,
            address: o.address,
            phone: o.phone,
            email: o.email,
            welcome_text: o.welcome_text,
            about_us_text: o.about_us_text,
            facebook_url: o.facebook_url,
            linkedin_url: o.linkedin_url,
            instagram_url: o.instagram_url,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Partial update of the public profile; absent fields keep their value
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    pub image: Option<String>,

    pub address: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub welcome_text: Option<String>,

    pub about_us_text: Option<String>,

    #[validate(url(message = "Invalid Facebook URL"))]
    pub facebook_url: Option<String>,

    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin_url: Option<String>,

    #[validate(url(message = "Invalid Instagram URL"))]
    pub instagram_url: Option<String>,
}

/// Rows removed by a delete, echoed as `{ "response": n }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteCountDto {
    pub response: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_accepts_camel_case_social_links() {
        let dto: UpdateOrganizationDto = serde_json::from_value(serde_json::json!({
            "welcomeText": "Hola",
            "facebookUrl": "https://facebook.com/somosmas"
        }))
        .unwrap();
        assert_eq!(dto.welcome_text.as_deref(), Some("Hola"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_bad_links() {
        let dto = UpdateOrganizationDto {
            instagram_url: Some("not a url".to_string()),
            email: Some("nope".to_string()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("instagram_url"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
