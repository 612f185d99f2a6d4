use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::guides::handlers;
use crate::features::guides::services::GuideService;

/// Create routes for the guides feature
pub fn routes(service: Arc<GuideService>) -> Router {
    Router::new()
        .route("/api/guides", get(handlers::list_guides))
        .route("/api/guides/{slug}", get(handlers::get_guide))
        .with_state(service)
}
