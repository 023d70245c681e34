//! User accounts.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/users` | Admin | List users |
//! | GET | `/users/{id}` | Yes | Get user |
//! | PUT | `/users/{id}` | Owner or Admin | Update first/last name, image |
//! | DELETE | `/users/{id}` | Owner or Admin | Delete account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
