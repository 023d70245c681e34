use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::features::uploads::handlers::upload_file;
use crate::features::uploads::services::UploadService;

/// Admin only
pub fn protected_routes(service: Arc<UploadService>) -> Router {
    // Multipart framing on top of the file itself
    let body_limit = service.max_file_size() + 1024 * 1024;

    Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(service)
}
