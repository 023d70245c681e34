use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryName};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            image: c.image,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Entry of the public category listing: the name and nothing else
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryNameDto {
    pub name: String,
}

impl From<CategoryName> for CategoryNameDto {
    fn from(c: CategoryName) -> Self {
        Self { name: c.name }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    pub image: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name cannot be empty"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_projection_serializes_only_name() {
        let dto: CategoryNameDto = CategoryName {
            name: "Educación".to_string(),
        }
        .into();
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "Educación" }));
    }

    #[test]
    fn test_create_requires_name() {
        let dto = CreateCategoryDto {
            name: String::new(),
            description: Some("sin nombre".to_string()),
            image: None,
        };
        assert!(dto.validate().is_err());
    }
}
