use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::activities::handlers;
use crate::features::activities::services::ActivityService;

pub fn public_routes(service: Arc<ActivityService>) -> Router {
    Router::new()
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{id}", get(handlers::get_activity))
        .with_state(service)
}

pub fn protected_routes(service: Arc<ActivityService>) -> Router {
    Router::new()
        .route("/activities", post(handlers::create_activity))
        .route(
            "/activities/{id}",
            put(handlers::update_activity).delete(handlers::delete_activity),
        )
        .with_state(service)
}
