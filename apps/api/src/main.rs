mod analysis;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::KeywordSkillExtractor;
use crate::analysis::scoring::ScoringEngine;
use crate::analysis::store::ResumeStore;
use crate::catalog::load_catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog once; it is read-only from here on
    let catalog = load_catalog(config.catalog_path.as_deref())
        .context("Failed to load job catalog")?;

    // Initialize skill extractor (vocabulary = catalog skills + skill guide + aliases)
    let extractor = KeywordSkillExtractor::new(&catalog)
        .context("Failed to build skill vocabulary")?;

    let engine = ScoringEngine::new(config.top_k);
    info!(
        jobs = catalog.len(),
        top_k = engine.top_k(),
        "Scoring engine ready"
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog: catalog.into(),
        engine,
        extractor: Arc::new(extractor),
        store: ResumeStore::new(config.max_history),
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
