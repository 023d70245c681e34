//! Comments on news items.
//!
//! Editing and deleting go through [`crate::features::auth::policy::authorize`]:
//! the comment's author or an `Admin` may do it, anyone else gets 401 and the
//! comment is left untouched.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CommentService;
