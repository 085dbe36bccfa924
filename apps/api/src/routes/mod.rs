pub mod health;
pub mod index;

use axum::{routing::get, Router};

use crate::admin;
use crate::annotations::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Participant API
        .route("/api/v1/session", get(handlers::handle_session))
        .route(
            "/api/v1/annotations",
            get(handlers::handle_history).post(handlers::handle_submit),
        )
        // Admin API
        .route(
            "/api/v1/admin/annotations",
            get(admin::handle_list_all).delete(admin::handle_delete_for_email),
        )
        .route(
            "/api/v1/admin/annotations/export",
            get(admin::handle_export_csv),
        )
        .with_state(state)
}
