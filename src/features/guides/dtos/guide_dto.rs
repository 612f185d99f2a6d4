use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::guides::models::{GuideRow, GuideWithDevice};
use crate::shared::json_list;

/// One step of a repair guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuideStepDto {
    pub title: String,
    pub description: String,
}

/// Request DTO for creating a guide
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGuideDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(regex(
        path = "*crate::shared::validation::SLUG_REGEX",
        message = "Slug must be lowercase alphanumeric words separated by single hyphens"
    ))]
    pub slug: String,

    pub device_id: i64,

    /// Free-text label, e.g. "Moderate" or "Difficult"
    pub difficulty: Option<String>,

    /// Free-text range, e.g. "30-60 minutes"
    pub time_required: Option<String>,

    #[serde(default)]
    pub tools_required: Vec<String>,

    #[serde(default)]
    pub parts_required: Vec<String>,

    #[serde(default)]
    pub steps: Vec<GuideStepDto>,
}

/// Response DTO for a guide with its list fields decoded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuideResponseDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub device_id: i64,
    pub difficulty: Option<String>,
    pub time_required: Option<String>,
    pub tools_required: Vec<String>,
    pub parts_required: Vec<String>,
    pub steps: Vec<GuideStepDto>,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, example = "2025-06-01 10:00:00")]
    pub created_at: NaiveDateTime,
}

impl From<GuideRow> for GuideResponseDto {
    fn from(g: GuideRow) -> Self {
        Self {
            tools_required: json_list::decode("tools_required", g.tools_required.as_deref()),
            parts_required: json_list::decode("parts_required", g.parts_required.as_deref()),
            steps: json_list::decode("steps", g.steps.as_deref()),
            id: g.id,
            title: g.title,
            slug: g.slug,
            device_id: g.device_id,
            difficulty: g.difficulty,
            time_required: g.time_required,
            created_at: g.created_at,
        }
    }
}

/// Response DTO for a guide with device and category names and slugs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuideDetailDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub device_id: i64,
    pub difficulty: Option<String>,
    pub time_required: Option<String>,
    pub tools_required: Vec<String>,
    pub parts_required: Vec<String>,
    pub steps: Vec<GuideStepDto>,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, example = "2025-06-01 10:00:00")]
    pub created_at: NaiveDateTime,
    pub device_name: String,
    pub device_slug: String,
    pub category_name: String,
    pub category_slug: String,
}

impl From<GuideWithDevice> for GuideDetailDto {
    fn from(row: GuideWithDevice) -> Self {
        let g = GuideResponseDto::from(row.guide);
        Self {
            id: g.id,
            title: g.title,
            slug: g.slug,
            device_id: g.device_id,
            difficulty: g.difficulty,
            time_required: g.time_required,
            tools_required: g.tools_required,
            parts_required: g.parts_required,
            steps: g.steps,
            created_at: g.created_at,
            device_name: row.device_name,
            device_slug: row.device_slug,
            category_name: row.category_name,
            category_slug: row.category_slug,
        }
    }
}
