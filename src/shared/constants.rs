/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - may manage every resource and edit or delete anyone's content.
/// Compared case-sensitively against the role name stored in `roles`.
pub const ROLE_ADMIN: &str = "Admin";

/// Standard role - assigned to every self-registered user
pub const ROLE_STANDARD: &str = "Standard";
