//! Contact form submissions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/contacts` | No | Submit the contact form |
//! | GET | `/contacts` | Admin | List submissions |
//!
//! Deleting a submission lives under `/organization/contacts/{id}`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ContactService;
