use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::slides::handlers;
use crate::features::slides::services::SlideService;

pub fn public_routes(service: Arc<SlideService>) -> Router {
    Router::new()
        .route("/slides", get(handlers::list_slides))
        .route("/slides/{id}", get(handlers::get_slide))
        .with_state(service)
}

/// Admin only
pub fn protected_routes(service: Arc<SlideService>) -> Router {
    Router::new()
        .route("/slides", post(handlers::create_slide))
        .route(
            "/slides/{id}",
            put(handlers::update_slide).delete(handlers::delete_slide),
        )
        .with_state(service)
}
