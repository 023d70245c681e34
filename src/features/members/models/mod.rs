mod member;

pub use member::{Member, MEMBER_COLUMNS};
