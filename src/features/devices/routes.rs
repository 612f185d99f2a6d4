use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::devices::handlers;
use crate::features::devices::services::DeviceService;

/// Create routes for the devices feature
pub fn routes(service: Arc<DeviceService>) -> Router {
    Router::new()
        .route("/api/devices", get(handlers::list_devices))
        .route("/api/devices/{slug}", get(handlers::get_device))
        .route(
            "/api/devices/{slug}/guides",
            get(handlers::list_device_guides),
        )
        .with_state(service)
}
