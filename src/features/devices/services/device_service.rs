use sqlx::{SqliteExecutor, SqlitePool};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::devices::dtos::{
    CreateDeviceDto, DeviceDetailDto, DeviceGuidesDto, DeviceResponseDto,
};
use crate::features::devices::models::{Device, DeviceWithCategory};
use crate::features::guides::dtos::GuideResponseDto;
use crate::features::guides::models::GuideRow;

const DEVICE_WITH_CATEGORY_SELECT: &str = r#"
    SELECT d.id AS id, d.name AS name, d.slug AS slug, d.category_id AS category_id,
           d.image_url AS image_url, d.created_at AS created_at,
           c.name AS category_name, c.slug AS category_slug
    FROM devices d
    JOIN categories c ON d.category_id = c.id
"#;

/// Service for device operations
pub struct DeviceService {
    pool: SqlitePool,
}

impl DeviceService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all devices with their category, ordered by device name
    pub async fn list(&self) -> Result<Vec<DeviceDetailDto>> {
        let query = format!("{} ORDER BY d.name", DEVICE_WITH_CATEGORY_SELECT);
        let devices = sqlx::query_as::<_, DeviceWithCategory>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list devices: {:?}", e);
                AppError::from(e)
            })?;

        Ok(devices.into_iter().map(Into::into).collect())
    }

    /// Get device by slug, `None` when no device has that slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<DeviceDetailDto>> {
        let device = fetch_by_slug(&self.pool, slug).await?;
        Ok(device.map(Into::into))
    }

    /// Create a new device under `category_id`
    pub async fn create(&self, dto: CreateDeviceDto) -> Result<DeviceResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let device = sqlx::query_as::<_, Device>(
            r#"
            INSERT INTO devices (name, slug, category_id, image_url)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, slug, category_id, image_url, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(dto.category_id)
        .bind(&dto.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create device '{}': {:?}", dto.slug, e);
            AppError::from(e)
        })?;

        tracing::info!(
            "Device created: id={}, slug={}, category_id={}",
            device.id,
            device.slug,
            device.category_id
        );

        Ok(device.into())
    }

    /// List guides for a device, ordered by title
    pub async fn list_guides(&self, device_id: i64) -> Result<Vec<GuideResponseDto>> {
        let guides = fetch_guides(&self.pool, device_id).await?;
        Ok(guides.into_iter().map(Into::into).collect())
    }

    /// Resolve a device by slug and list its guides from the same snapshot
    pub async fn get_with_guides(&self, slug: &str) -> Result<Option<DeviceGuidesDto>> {
        let mut tx = self.pool.begin().await?;

        let Some(device) = fetch_by_slug(&mut *tx, slug).await? else {
            return Ok(None);
        };
        let guides = fetch_guides(&mut *tx, device.device.id).await?;

        tx.commit().await?;

        Ok(Some(DeviceGuidesDto {
            device: device.into(),
            guides: guides.into_iter().map(Into::into).collect(),
        }))
    }
}

async fn fetch_by_slug<'e, E>(executor: E, slug: &str) -> Result<Option<DeviceWithCategory>>
where
    E: SqliteExecutor<'e>,
{
    let query = format!("{} WHERE d.slug = ?", DEVICE_WITH_CATEGORY_SELECT);
    sqlx::query_as::<_, DeviceWithCategory>(&query)
        .bind(slug)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get device by slug {}: {:?}", slug, e);
            AppError::from(e)
        })
}

async fn fetch_guides<'e, E>(executor: E, device_id: i64) -> Result<Vec<GuideRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, GuideRow>(
        r#"
        SELECT id, title, slug, device_id, difficulty, time_required,
               tools_required, parts_required, steps, created_at
        FROM guides
        WHERE device_id = ?
        ORDER BY title
        "#,
    )
    .bind(device_id)
    .fetch_all(executor)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list guides for device {}: {:?}", device_id, e);
        AppError::from(e)
    })
}
