use std::collections::HashSet;

use sqlx::SqlitePool;
use tracing::info;

use crate::models::annotation::AnnotationRow;

/// All video_id values the email has already submitted a description for.
/// "Done" means any matching row exists; duplicates collapse into the set.
pub async fn list_completed_video_ids(
    pool: &SqlitePool,
    email: &str,
) -> Result<HashSet<String>, sqlx::Error> {
    let ids: Vec<String> = sqlx::query_scalar("SELECT video_id FROM annotations WHERE email = ?1")
        .bind(email)
        .fetch_all(pool)
        .await?;

    Ok(ids.into_iter().collect())
}

/// Appends one submission row with a DB-assigned timestamp. No validation
/// here; callers enforce the non-empty description and assignment checks.
pub async fn insert_annotation(
    pool: &SqlitePool,
    email: &str,
    video_id: &str,
    description: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO annotations (email, video_id, description) VALUES (?1, ?2, ?3)",
    )
    .bind(email)
    .bind(video_id)
    .bind(description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    info!("Inserted annotation {id} for {email} / video {video_id}");
    Ok(id)
}

/// A participant's own submission history, oldest first.
/// CURRENT_TIMESTAMP is second resolution, so id breaks ties.
pub async fn list_for_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Vec<AnnotationRow>, sqlx::Error> {
    let rows = sqlx::query_as(
        "SELECT id, email, video_id, description, timestamp
         FROM annotations WHERE email = ?1
         ORDER BY timestamp ASC, id ASC",
    )
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Every submission row, newest first. Admin view.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<AnnotationRow>, sqlx::Error> {
    let rows = sqlx::query_as(
        "SELECT id, email, video_id, description, timestamp
         FROM annotations
         ORDER BY timestamp DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Deletes every row for an email, returning the number removed.
pub async fn delete_all_for_email(pool: &SqlitePool, email: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM annotations WHERE email = ?1")
        .bind(email)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected();
    info!("Deleted {deleted} annotation rows for {email}");
    Ok(deleted)
}
