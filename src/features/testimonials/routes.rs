use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::testimonials::handlers;
use crate::features::testimonials::services::TestimonialService;

pub fn public_routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route("/testimonials", get(handlers::list_testimonials))
        .with_state(service)
}

/// Everything but the list is admin only
pub fn protected_routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route("/testimonials", post(handlers::create_testimonial))
        .route(
            "/testimonials/{id}",
            get(handlers::get_testimonial)
                .put(handlers::update_testimonial)
                .delete(handlers::delete_testimonial),
        )
        .with_state(service)
}
