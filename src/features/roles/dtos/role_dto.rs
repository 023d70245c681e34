use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::roles::models::Role;
use crate::shared::validation::ROLE_NAME_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponseDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Role> for RoleResponseDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoleDto {
    /// Role names are matched exactly, so `Admin` and `admin` are different roles
    #[validate(
        length(min = 1, max = 50, message = "Name must be 1-50 characters"),
        regex(path = *ROLE_NAME_REGEX, message = "Name must be a capitalized word")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleDto {
    #[validate(
        length(min = 1, max = 50, message = "Name must be 1-50 characters"),
        regex(path = *ROLE_NAME_REGEX, message = "Name must be a capitalized word")
    )]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_must_be_capitalized_word() {
        let ok = CreateRoleDto {
            name: "Editor".to_string(),
            description: None,
        };
        assert!(ok.validate().is_ok());

        for bad in ["editor", "", "Content Editor", "Admin1"] {
            let dto = CreateRoleDto {
                name: bad.to_string(),
                description: None,
            };
            assert!(dto.validate().is_err(), "{bad:?} should be rejected");
        }
    }
}
