use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::devices::dtos::{DeviceDetailDto, DeviceGuidesDto};
use crate::features::devices::services::DeviceService;
use crate::shared::types::ApiResponse;

/// List all devices
#[utoipa::path(
    get,
    path = "/api/devices",
    responses(
        (status = 200, description = "List of devices with category info", body = ApiResponse<Vec<DeviceDetailDto>>),
        (status = 500, description = "Storage failure")
    ),
    tag = "devices"
)]
pub async fn list_devices(
    State(service): State<Arc<DeviceService>>,
) -> Result<Json<ApiResponse<Vec<DeviceDetailDto>>>> {
    let devices = service.list().await?;
    Ok(Json(ApiResponse::list(devices)))
}

/// Get device by slug
#[utoipa::path(
    get,
    path = "/api/devices/{slug}",
    params(
        ("slug" = String, Path, description = "Device slug")
    ),
    responses(
        (status = 200, description = "Device found", body = ApiResponse<DeviceDetailDto>),
        (status = 404, description = "Device not found")
    ),
    tag = "devices"
)]
pub async fn get_device(
    State(service): State<Arc<DeviceService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<DeviceDetailDto>>> {
    let device = service
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Device not found".to_string()))?;
    Ok(Json(ApiResponse::success(device)))
}

/// List guides for a device
///
/// A device without guides is still a 200 with `count = 0`.
#[utoipa::path(
    get,
    path = "/api/devices/{slug}/guides",
    params(
        ("slug" = String, Path, description = "Device slug")
    ),
    responses(
        (status = 200, description = "Device with its guides", body = ApiResponse<DeviceGuidesDto>),
        (status = 404, description = "Device not found")
    ),
    tag = "devices"
)]
pub async fn list_device_guides(
    State(service): State<Arc<DeviceService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<DeviceGuidesDto>>> {
    let result = service
        .get_with_guides(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Device not found".to_string()))?;
    let count = result.guides.len();
    Ok(Json(ApiResponse::with_count(result, count)))
}
