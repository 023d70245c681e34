use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ROLE_ADMIN;

/// Identity attached to a request by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
    pub role_id: i32,
    /// Name of `role_id` as stored in `roles` when the request came in
    pub role_name: String,
}

impl AuthenticatedUser {
    /// Exact, case-sensitive match against the "Admin" role name
    pub fn is_admin(&self) -> bool {
        self.role_name == ROLE_ADMIN
    }
}

/// Identity block inside the token payload: `{ "user": { id, email, roleId } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUser {
    pub id: i32,
    pub email: String,
    pub role_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: TokenUser,
    pub iat: i64,
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role_name: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            email: "a@b.com".to_string(),
            role_id: 1,
            role_name: role_name.to_string(),
        }
    }

    #[test]
    fn test_admin_match_is_case_sensitive() {
        assert!(user_with_role("Admin").is_admin());
        assert!(!user_with_role("admin").is_admin());
        assert!(!user_with_role("ADMIN").is_admin());
        assert!(!user_with_role("Standard").is_admin());
    }

    #[test]
    fn test_claims_wire_format() {
        let claims = TokenClaims {
            user: TokenUser {
                id: 7,
                email: "a@b.com".to_string(),
                role_id: 2,
            },
            iat: 100,
            exp: 200,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["user"]["roleId"], 2);
        assert_eq!(value["user"]["email"], "a@b.com");
        assert_eq!(value["exp"], 200);
    }
}
