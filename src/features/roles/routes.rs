use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::roles::handlers;
use crate::features::roles::services::RoleService;

/// Role management, admin only
pub fn protected_routes(service: Arc<RoleService>) -> Router {
    Router::new()
        .route(
            "/roles",
            get(handlers::list_roles).post(handlers::create_role),
        )
        .route(
            "/roles/{id}",
            get(handlers::get_role)
                .put(handlers::update_role)
                .delete(handlers::delete_role),
        )
        .with_state(service)
}
