use sqlx::{SqliteExecutor, SqlitePool};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryDevicesDto, CategoryResponseDto, CreateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::devices::dtos::DeviceResponseDto;
use crate::features::devices::models::Device;

/// Service for category operations
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::from(e)
        })?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Get category by slug, `None` when no category has that slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CategoryResponseDto>> {
        let category = fetch_by_slug(&self.pool, slug).await?;
        Ok(category.map(Into::into))
    }

    /// Create a new category
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES (?, ?)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category '{}': {:?}", dto.slug, e);
            AppError::from(e)
        })?;

        tracing::info!(
            "Category created: id={}, slug={}",
            category.id,
            category.slug
        );

        Ok(category.into())
    }

    /// List devices belonging to a category, ordered by name
    pub async fn list_devices(&self, category_id: i64) -> Result<Vec<DeviceResponseDto>> {
        let devices = fetch_devices(&self.pool, category_id).await?;
        Ok(devices.into_iter().map(Into::into).collect())
    }

    /// Resolve a category by slug and list its devices from the same snapshot
    pub async fn get_with_devices(&self, slug: &str) -> Result<Option<CategoryDevicesDto>> {
        let mut tx = self.pool.begin().await?;

        let Some(category) = fetch_by_slug(&mut *tx, slug).await? else {
            return Ok(None);
        };
        let devices = fetch_devices(&mut *tx, category.id).await?;

        tx.commit().await?;

        Ok(Some(CategoryDevicesDto {
            category: category.into(),
            devices: devices.into_iter().map(Into::into).collect(),
        }))
    }
}

async fn fetch_by_slug<'e, E>(executor: E, slug: &str) -> Result<Option<Category>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, slug, created_at
        FROM categories
        WHERE slug = ?
        "#,
    )
    .bind(slug)
    .fetch_optional(executor)
    .await
    .map_err(|e| {
        tracing::error!("Failed to get category by slug {}: {:?}", slug, e);
        AppError::from(e)
    })
}

async fn fetch_devices<'e, E>(executor: E, category_id: i64) -> Result<Vec<Device>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Device>(
        r#"
        SELECT id, name, slug, category_id, image_url, created_at
        FROM devices
        WHERE category_id = ?
        ORDER BY name
        "#,
    )
    .bind(category_id)
    .fetch_all(executor)
    .await
    .map_err(|e| {
        tracing::error!(
            "Failed to list devices for category {}: {:?}",
            category_id,
            e
        );
        AppError::from(e)
    })
}
