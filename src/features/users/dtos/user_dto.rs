use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::models::User;

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: Option<String>,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            image: u.image,
            role_id: u.role_id,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Partial profile update; absent fields keep their stored value
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_omits_password_hash() {
        let now = Utc::now();
        let dto: UserResponseDto = User {
            id: 7,
            first_name: "Ana".to_string(),
            last_name: "Paz".to_string(),
            email: "ana@somosmas.org".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            image: None,
            role_id: 2,
            created_at: now,
            updated_at: now,
        }
        .into();

        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["roleId"], 2);
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn test_update_only_validates_present_fields() {
        assert!(UpdateUserDto::default().validate().is_ok());

        let dto = UpdateUserDto {
            first_name: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
