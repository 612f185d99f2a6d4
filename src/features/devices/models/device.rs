use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for device
#[derive(Debug, Clone, FromRow)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category_id: i64,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Device row joined with its owning category
#[derive(Debug, Clone, FromRow)]
pub struct DeviceWithCategory {
    #[sqlx(flatten)]
    pub device: Device,
    pub category_name: String,
    pub category_slug: String,
}
