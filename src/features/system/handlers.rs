use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::shared::types::ApiResponse;

/// Basic information about the running service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoDto {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ApiResponse<ServiceInfoDto>),
    ),
    tag = "system"
)]
pub async fn service_info() -> Json<ApiResponse<ServiceInfoDto>> {
    Json(ApiResponse::success(ServiceInfoDto {
        message: "Repair Catalog API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    }))
}

/// Simple health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unknown routes, keeps the error envelope
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
