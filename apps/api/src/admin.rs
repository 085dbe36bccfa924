use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::annotations::store;
use crate::catalog::normalize_email;
use crate::errors::AppError;
use crate::models::annotation::AnnotationRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AdminQuery {
    pub email: String,
}

#[derive(Deserialize)]
pub struct DeleteRequest {
    pub email: String,
    pub target_email: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub target_email: String,
    pub deleted: u64,
}

/// Plaintext equality against the configured admin address. Anything else
/// is forbidden; there is no further auth layer by design.
fn require_admin(state: &AppState, email: &str) -> Result<(), AppError> {
    if normalize_email(email) == state.config.admin_email {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// GET /api/v1/admin/annotations
/// Every collected row, newest first.
pub async fn handle_list_all(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
) -> Result<Json<Vec<AnnotationRow>>, AppError> {
    require_admin(&state, &params.email)?;
    let rows = store::list_all(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/v1/admin/annotations/export
/// All rows as a CSV attachment named all_annotations.csv.
pub async fn handle_export_csv(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &params.email)?;
    let rows = store::list_all(&state.db).await?;
    let csv = rows_to_csv(&rows)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"all_annotations.csv\"",
            ),
        ],
        csv,
    ))
}

/// DELETE /api/v1/admin/annotations
/// Removes every row for the target email. The page asks the admin to type
/// the target address; an empty target is rejected with no state change.
pub async fn handle_delete_for_email(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    require_admin(&state, &req.email)?;

    let target = normalize_email(&req.target_email);
    if target.is_empty() {
        return Err(AppError::Validation("Please enter a valid email.".into()));
    }

    let deleted = store::delete_all_for_email(&state.db, &target).await?;
    Ok(Json(DeleteResponse {
        target_email: target,
        deleted,
    }))
}

fn rows_to_csv(rows: &[AnnotationRow]) -> Result<String, AppError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["id", "email", "video_id", "description", "timestamp"])
        .map_err(anyhow::Error::from)?;

    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.email.clone(),
            row.video_id.clone(),
            row.description.clone().unwrap_or_default(),
            row.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        ])
        .map_err(anyhow::Error::from)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV buffer flush failed: {e}"))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(e.into()))
}
