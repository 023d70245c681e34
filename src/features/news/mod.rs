//! News items and the comments attached to them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/news?page=` | No | Paginated list |
//! | GET | `/news/{id}` | Admin | Get item |
//! | POST | `/news` | Admin | Create item |
//! | PUT | `/news/{id}` | Admin | Update item |
//! | DELETE | `/news/{id}` | Admin | Delete item |
//! | GET | `/news/{id}/comments` | Admin | Comments, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NewsService;
