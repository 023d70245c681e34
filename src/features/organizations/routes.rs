use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::features::organizations::handlers;
use crate::features::organizations::services::OrganizationService;

pub fn public_routes(service: Arc<OrganizationService>) -> Router {
    Router::new()
        .route(
            "/organization/public",
            get(handlers::get_public_organization),
        )
        .with_state(service)
}

/// Admin only
pub fn protected_routes(service: Arc<OrganizationService>) -> Router {
    Router::new()
        .route(
            "/organization/public",
            put(handlers::update_public_organization),
        )
        .route(
            "/organization/contacts/{id}",
            delete(handlers::delete_contact),
        )
        .with_state(service)
}
