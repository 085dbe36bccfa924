use std::sync::Arc;

use sqlx::SqlitePool;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Video assignments, loaded once at startup. Restart to pick up changes.
    pub catalog: Arc<Catalog>,
    pub config: Config,
}
