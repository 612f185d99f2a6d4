use axum::{routing::get, Router};

use crate::features::system::handlers;

/// Create routes for the system endpoints
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health_check))
}
