use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::guides::dtos::GuideDetailDto;
use crate::features::guides::services::GuideService;
use crate::shared::types::ApiResponse;

/// List all guides
#[utoipa::path(
    get,
    path = "/api/guides",
    responses(
        (status = 200, description = "List of guides with device and category info", body = ApiResponse<Vec<GuideDetailDto>>),
        (status = 500, description = "Storage failure")
    ),
    tag = "guides"
)]
pub async fn list_guides(
    State(service): State<Arc<GuideService>>,
) -> Result<Json<ApiResponse<Vec<GuideDetailDto>>>> {
    let guides = service.list().await?;
    Ok(Json(ApiResponse::list(guides)))
}

/// Get guide by slug
#[utoipa::path(
    get,
    path = "/api/guides/{slug}",
    params(
        ("slug" = String, Path, description = "Guide slug")
    ),
    responses(
        (status = 200, description = "Guide found", body = ApiResponse<GuideDetailDto>),
        (status = 404, description = "Guide not found")
    ),
    tag = "guides"
)]
pub async fn get_guide(
    State(service): State<Arc<GuideService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<GuideDetailDto>>> {
    let guide = service
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Guide not found".to_string()))?;
    Ok(Json(ApiResponse::success(guide)))
}
