use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::members::models::Member;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponseDto {
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

impl From<Member> for MemberResponseDto {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            name: m.name,
            facebook_url: m.facebook_url,
            instagram_url: m.instagram_url,
            linkedin_url: m.linkedin_url,
            image: m.image,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// `data` of a created member: `{ "member": { ... } }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberCreatedDto {
    pub member: MemberResponseDto,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(url(message = "Invalid Facebook URL"))]
    pub facebook_url: Option<String>,

    #[validate(url(message = "Invalid Instagram URL"))]
    pub instagram_url: Option<String>,

    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin_url: Option<String>,

    pub image: Option<String>,

    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberDto {
    #[validate(length(min = 1, max = 255, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(url(message = "Invalid Facebook URL"))]
    pub facebook_url: Option<String>,

    #[validate(url(message = "Invalid Instagram URL"))]
    pub instagram_url: Option<String>,

    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin_url: Option<String>,

    pub image: Option<String>,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_whitelists_known_fields() {
        let dto: CreateMemberDto = serde_json::from_value(serde_json::json!({
            "name": "Rocío",
            "facebookUrl": "https://facebook.com/rocio",
            "id": 42,
            "createdAt": "2001-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(dto.name, "Rocío");
        assert_eq!(dto.facebook_url.as_deref(), Some("https://facebook.com/rocio"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_social_links_must_be_urls() {
        let dto = UpdateMemberDto {
            linkedin_url: Some("linkedin".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
