mod admin;
mod annotations;
mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting video description API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load the video assignment catalog. Missing or malformed file aborts
    // startup; assignments are operator-managed and loaded exactly once.
    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
    info!(
        "Catalog loaded from {} ({} participants)",
        config.catalog_path,
        catalog.participant_count()
    );

    // Initialize SQLite and the annotations table
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Build app state
    let state = AppState {
        db,
        catalog,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
