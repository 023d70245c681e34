//! Owner-or-admin authorization for mutating user-owned records.
//!
//! Every handler that edits or deletes something a user owns calls
//! [`authorize`] before touching the database.

use std::fmt;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

/// What the caller is trying to do to the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Edit,
    Delete,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Edit => write!(f, "edit"),
            Capability::Delete => write!(f, "delete"),
        }
    }
}

/// The user a resource belongs to
#[derive(Debug, Clone, Copy)]
pub struct ResourceOwner<'a> {
    pub email: &'a str,
}

/// Allow when the actor owns the resource (same email) or holds the
/// `Admin` role; deny with 401 otherwise.
pub fn authorize(
    actor: &AuthenticatedUser,
    owner: ResourceOwner<'_>,
    capability: Capability,
) -> Result<(), AppError> {
    if actor.email == owner.email || actor.is_admin() {
        return Ok(());
    }

    tracing::info!(
        "Denied {} for user {} (role {}) on resource owned by another user",
        capability,
        actor.id,
        actor.role_name
    );

    Err(AppError::Unauthorized(format!(
        "You don't have permissions to {}",
        capability
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(email: &str, role_name: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 10,
            email: email.to_string(),
            role_id: if role_name == "Admin" { 1 } else { 2 },
            role_name: role_name.to_string(),
        }
    }

    const OWNER: ResourceOwner<'static> = ResourceOwner {
        email: "owner@somosmas.org",
    };

    #[test]
    fn test_owner_may_edit_and_delete() {
        let owner = actor("owner@somosmas.org", "Standard");
        assert!(authorize(&owner, OWNER, Capability::Edit).is_ok());
        assert!(authorize(&owner, OWNER, Capability::Delete).is_ok());
    }

    #[test]
    fn test_admin_allowed_regardless_of_email() {
        let admin = actor("someone-else@somosmas.org", "Admin");
        assert!(authorize(&admin, OWNER, Capability::Edit).is_ok());
        assert!(authorize(&admin, OWNER, Capability::Delete).is_ok());
    }

    #[test]
    fn test_other_standard_user_denied_with_401() {
        let other = actor("intruder@somosmas.org", "Standard");
        for capability in [Capability::Edit, Capability::Delete] {
            let err = authorize(&other, OWNER, capability).unwrap_err();
            assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
            assert!(err.to_string().contains(&capability.to_string()));
        }
    }

    #[test]
    fn test_role_match_is_case_sensitive() {
        for role in ["admin", "ADMIN", "Admin ", "Administrator"] {
            let user = actor("intruder@somosmas.org", role);
            assert!(authorize(&user, OWNER, Capability::Delete).is_err());
        }
    }

    #[test]
    fn test_email_match_is_exact() {
        let user = actor("Owner@somosmas.org", "Standard");
        assert!(authorize(&user, OWNER, Capability::Edit).is_err());
    }
}
