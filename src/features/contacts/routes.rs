use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Anyone may leave a contact
pub fn public_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contacts", post(handlers::create_contact))
        .with_state(service)
}

pub fn protected_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contacts", get(handlers::list_contacts))
        .with_state(service)
}
