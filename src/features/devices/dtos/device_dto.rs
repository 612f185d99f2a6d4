use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::devices::models::{Device, DeviceWithCategory};
use crate::features::guides::dtos::GuideResponseDto;

/// Request DTO for creating a device
///
/// `category_id` is not checked by the service; referential integrity is left
/// to the storage engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDeviceDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(regex(
        path = "*crate::shared::validation::SLUG_REGEX",
        message = "Slug must be lowercase alphanumeric words separated by single hyphens"
    ))]
    pub slug: String,

    pub category_id: i64,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,
}

/// Response DTO for a bare device row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviceResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category_id: i64,
    pub image_url: Option<String>,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, example = "2025-06-01 10:00:00")]
    pub created_at: NaiveDateTime,
}

impl From<Device> for DeviceResponseDto {
    fn from(d: Device) -> Self {
        Self {
            id: d.id,
            name: d.name,
            slug: d.slug,
            category_id: d.category_id,
            image_url: d.image_url,
            created_at: d.created_at,
        }
    }
}

/// Response DTO for a device with its category's name and slug
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviceDetailDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category_id: i64,
    pub image_url: Option<String>,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, example = "2025-06-01 10:00:00")]
    pub created_at: NaiveDateTime,
    pub category_name: String,
    pub category_slug: String,
}

impl From<DeviceWithCategory> for DeviceDetailDto {
    fn from(row: DeviceWithCategory) -> Self {
        let d = row.device;
        Self {
            id: d.id,
            name: d.name,
            slug: d.slug,
            category_id: d.category_id,
            image_url: d.image_url,
            created_at: d.created_at,
            category_name: row.category_name,
            category_slug: row.category_slug,
        }
    }
}

/// Device together with its guides
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviceGuidesDto {
    pub device: DeviceDetailDto,
    pub guides: Vec<GuideResponseDto>,
}
