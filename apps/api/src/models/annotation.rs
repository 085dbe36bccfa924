use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted submission row in the `annotations` table.
/// Rows are insert-only; the admin can delete them in bulk per email.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnnotationRow {
    pub id: i64,
    pub email: String,
    pub video_id: String,
    pub description: Option<String>,
    /// DB-assigned at insert (CURRENT_TIMESTAMP, second resolution).
    pub timestamp: NaiveDateTime,
}
