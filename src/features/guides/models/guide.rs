use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for guide
///
/// `tools_required`, `parts_required` and `steps` hold the raw JSON text of
/// the columns; see [`crate::shared::json_list`].
#[derive(Debug, Clone, FromRow)]
pub struct GuideRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub device_id: i64,
    pub difficulty: Option<String>,
    pub time_required: Option<String>,
    pub tools_required: Option<String>,
    pub parts_required: Option<String>,
    pub steps: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Guide row joined with its device and the device's category
#[derive(Debug, Clone, FromRow)]
pub struct GuideWithDevice {
    #[sqlx(flatten)]
    pub guide: GuideRow,
    pub device_name: String,
    pub device_slug: String,
    pub category_name: String,
    pub category_slug: String,
}
