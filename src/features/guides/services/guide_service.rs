use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::guides::dtos::{CreateGuideDto, GuideDetailDto, GuideResponseDto};
use crate::features::guides::models::GuideWithDevice;
use crate::shared::json_list;

const GUIDE_WITH_DEVICE_SELECT: &str = r#"
    SELECT g.id AS id, g.title AS title, g.slug AS slug, g.device_id AS device_id,
           g.difficulty AS difficulty, g.time_required AS time_required,
           g.tools_required AS tools_required, g.parts_required AS parts_required,
           g.steps AS steps, g.created_at AS created_at,
           d.name AS device_name, d.slug AS device_slug,
           c.name AS category_name, c.slug AS category_slug
    FROM guides g
    JOIN devices d ON g.device_id = d.id
    JOIN categories c ON d.category_id = c.id
"#;

/// Service for guide operations
pub struct GuideService {
    pool: SqlitePool,
}

impl GuideService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all guides with device and category info, ordered by title
    pub async fn list(&self) -> Result<Vec<GuideDetailDto>> {
        let query = format!("{} ORDER BY g.title", GUIDE_WITH_DEVICE_SELECT);
        let guides = sqlx::query_as::<_, GuideWithDevice>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list guides: {:?}", e);
                AppError::from(e)
            })?;

        Ok(guides.into_iter().map(Into::into).collect())
    }

    /// Get guide by slug, `None` when no guide has that slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<GuideDetailDto>> {
        let query = format!("{} WHERE g.slug = ?", GUIDE_WITH_DEVICE_SELECT);
        let guide = sqlx::query_as::<_, GuideWithDevice>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get guide by slug {}: {:?}", slug, e);
                AppError::from(e)
            })?;

        Ok(guide.map(Into::into))
    }

    /// Create a new guide for `device_id`
    ///
    /// The list fields are stored as JSON text; the returned DTO carries them
    /// exactly as given.
    pub async fn create(&self, dto: CreateGuideDto) -> Result<GuideResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let tools_required = json_list::encode(&dto.tools_required)?;
        let parts_required = json_list::encode(&dto.parts_required)?;
        let steps = json_list::encode(&dto.steps)?;

        let (id, created_at) = sqlx::query_as::<_, (i64, NaiveDateTime)>(
            r#"
            INSERT INTO guides (
                title, slug, device_id, difficulty, time_required,
                tools_required, parts_required, steps
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, created_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.slug)
        .bind(dto.device_id)
        .bind(&dto.difficulty)
        .bind(&dto.time_required)
        .bind(tools_required)
        .bind(parts_required)
        .bind(steps)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create guide '{}': {:?}", dto.slug, e);
            AppError::from(e)
        })?;

        tracing::info!(
            "Guide created: id={}, slug={}, device_id={}",
            id,
            dto.slug,
            dto.device_id
        );

        Ok(GuideResponseDto {
            id,
            title: dto.title,
            slug: dto.slug,
            device_id: dto.device_id,
            difficulty: dto.difficulty,
            time_required: dto.time_required,
            tools_required: dto.tools_required,
            parts_required: dto.parts_required,
            steps: dto.steps,
            created_at,
        })
    }
}
