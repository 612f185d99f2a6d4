use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::devices::dtos::DeviceResponseDto;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(regex(
        path = "*crate::shared::validation::SLUG_REGEX",
        message = "Slug must be lowercase alphanumeric words separated by single hyphens"
    ))]
    pub slug: String,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, example = "2025-06-01 10:00:00")]
    pub created_at: NaiveDateTime,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            created_at: c.created_at,
        }
    }
}

/// Category together with the devices it owns
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDevicesDto {
    pub category: CategoryResponseDto,
    pub devices: Vec<DeviceResponseDto>,
}
