use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::annotations::flow::{next_task, SessionView};
use crate::annotations::store;
use crate::catalog::normalize_email;
use crate::errors::AppError;
use crate::models::annotation::AnnotationRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub email: String,
    pub video_id: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub id: i64,
}

/// GET /api/v1/session
/// Computes the view for an email: admin, no-tasks warning, the next
/// unanswered video, or the completion summary.
pub async fn handle_session(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<SessionView>, AppError> {
    let email = normalize_email(&params.email);
    if email.is_empty() {
        return Err(AppError::Validation("Please enter your email.".into()));
    }

    if email == state.config.admin_email {
        return Ok(Json(SessionView::Admin));
    }

    let Some(assigned) = state.catalog.tasks_for(&email) else {
        return Ok(Json(SessionView::NoTasks));
    };

    let completed = store::list_completed_video_ids(&state.db, &email).await?;

    match next_task(assigned, &completed) {
        Some(video) => Ok(Json(SessionView::Task {
            video: video.clone(),
            completed_count: assigned
                .iter()
                .filter(|t| completed.contains(&t.id))
                .count(),
            assigned_count: assigned.len(),
        })),
        None => {
            let submissions = store::list_for_email(&state.db, &email).await?;
            Ok(Json(SessionView::Done { submissions }))
        }
    }
}

/// POST /api/v1/annotations
/// Records one description. Rejects empty descriptions and videos not
/// assigned to the email; does not reject re-submission of an already
/// completed video (the page never offers one, but two tabs can race).
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let email = normalize_email(&req.email);
    if email.is_empty() {
        return Err(AppError::Validation("Please enter your email.".into()));
    }

    let Some(assigned) = state.catalog.tasks_for(&email) else {
        return Err(AppError::Validation(
            "No tasks found for this email.".into(),
        ));
    };

    let description = req.description.trim();
    if description.is_empty() {
        return Err(AppError::Validation(
            "Description cannot be empty.".into(),
        ));
    }

    if !assigned.iter().any(|t| t.id == req.video_id) {
        return Err(AppError::Validation(format!(
            "Video '{}' is not assigned to this email.",
            req.video_id
        )));
    }

    let id = store::insert_annotation(&state.db, &email, &req.video_id, description).await?;
    Ok((StatusCode::CREATED, Json(SubmitResponse { id })))
}

/// GET /api/v1/annotations
/// A participant's own submissions, oldest first.
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<Vec<AnnotationRow>>, AppError> {
    let email = normalize_email(&params.email);
    if email.is_empty() {
        return Err(AppError::Validation("Please enter your email.".into()));
    }

    let rows = store::list_for_email(&state.db, &email).await?;
    Ok(Json(rows))
}
