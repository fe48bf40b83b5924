pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/resumes", get(handlers::handle_list_resumes))
        .route("/api/resumes/upload", post(handlers::handle_upload))
        .route("/api/analyses", post(handlers::handle_score_skills))
        .route(
            "/api/analyses/:resume_id",
            get(handlers::handle_get_analysis),
        )
        .route("/api/jobs", get(handlers::handle_list_jobs))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
