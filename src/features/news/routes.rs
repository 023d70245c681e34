use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

pub fn public_routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/news", get(handlers::list_news))
        .with_state(service)
}

/// Admin only
pub fn protected_routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/news", post(handlers::create_news))
        .route(
            "/news/{id}",
            get(handlers::get_news)
                .put(handlers::update_news)
                .delete(handlers::delete_news),
        )
        .route("/news/{id}/comments", get(handlers::list_news_comments))
        .with_state(service)
}
