use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::slides::models::Slide;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlideResponseDto {
    pub id: i32,
    pub image_url: String,
    pub text: Option<String>,
    pub position: i32,
    pub organization_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Slide> for SlideResponseDto {
    fn from(s: Slide) -> Self {
        Self {
            id: s.id,
            image_url: s.image_url,
            text: s.text,
            position: s.position,
            organization_id: s.organization_id,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideDto {
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,

    pub text: Option<String>,

    /// Appended after the last slide when omitted
    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: Option<i32>,

    #[validate(range(min = 1, message = "Invalid organizationId"))]
    pub organization_id: Option<i32>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlideDto {
    #[validate(length(min = 1, message = "Image URL cannot be empty"))]
    pub image_url: Option<String>,

    pub text: Option<String>,

    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: Option<i32>,

    #[validate(range(min = 1, message = "Invalid organizationId"))]
    pub organization_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_slide_validation() {
        let dto: CreateSlideDto = serde_json::from_value(serde_json::json!({
            "imageUrl": "https://cdn.example.com/s.png",
            "position": -1
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("position"));
    }
}
