pub mod categories;
pub mod devices;
pub mod guides;
pub mod system;

#[cfg(test)]
mod api_tests;

use std::sync::Arc;

use axum::Router;

pub use categories::CategoryService;
pub use devices::DeviceService;
pub use guides::GuideService;

/// Every public route of the service, without middleware layers
pub fn router(
    category_service: Arc<CategoryService>,
    device_service: Arc<DeviceService>,
    guide_service: Arc<GuideService>,
) -> Router {
    Router::new()
        .merge(system::routes::routes())
        .merge(categories::routes::routes(category_service))
        .merge(devices::routes::routes(device_service))
        .merge(guides::routes::routes(guide_service))
        .fallback(system::handlers::route_not_found)
}
