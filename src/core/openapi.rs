use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::devices::{dtos as devices_dtos, handlers as devices_handlers};
use crate::features::guides::{dtos as guides_dtos, handlers as guides_handlers};
use crate::features::system::handlers as system_handlers;
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // System
        system_handlers::service_info,
        system_handlers::health_check,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::list_category_devices,
        // Devices
        devices_handlers::list_devices,
        devices_handlers::get_device,
        devices_handlers::list_device_guides,
        // Guides
        guides_handlers::list_guides,
        guides_handlers::get_guide,
    ),
    components(
        schemas(
            // System
            system_handlers::ServiceInfoDto,
            ApiResponse<system_handlers::ServiceInfoDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryDevicesDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::CategoryDevicesDto>,
            // Devices
            devices_dtos::DeviceResponseDto,
            devices_dtos::DeviceDetailDto,
            devices_dtos::DeviceGuidesDto,
            ApiResponse<Vec<devices_dtos::DeviceDetailDto>>,
            ApiResponse<devices_dtos::DeviceDetailDto>,
            ApiResponse<devices_dtos::DeviceGuidesDto>,
            // Guides
            guides_dtos::GuideStepDto,
            guides_dtos::GuideResponseDto,
            guides_dtos::GuideDetailDto,
            ApiResponse<Vec<guides_dtos::GuideDetailDto>>,
            ApiResponse<guides_dtos::GuideDetailDto>,
        )
    ),
    tags(
        (name = "system", description = "Service info and health"),
        (name = "categories", description = "Device categories"),
        (name = "devices", description = "Devices and their guides"),
        (name = "guides", description = "Repair guides"),
    ),
    info(
        title = "Repair Catalog API",
        version = "0.1.0",
        description = "Categories, devices and repair guides",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
