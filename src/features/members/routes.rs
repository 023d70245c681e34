use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::members::handlers;
use crate::features::members::services::MemberService;

pub fn public_routes(service: Arc<MemberService>) -> Router {
    Router::new()
        .route("/members", get(handlers::list_members))
        .with_state(service)
}

/// Admin only
pub fn protected_routes(service: Arc<MemberService>) -> Router {
    Router::new()
        .route("/members", post(handlers::create_member))
        .route(
            "/members/{id}",
            get(handlers::get_member)
                .put(handlers::update_member)
                .delete(handlers::delete_member),
        )
        .with_state(service)
}
