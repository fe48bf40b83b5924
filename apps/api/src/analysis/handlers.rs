//! Axum route handlers for the Resume / Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::assembler::{assemble_now, AnalysisIds};
use crate::analysis::extractor::{mime_essence, ACCEPTED_MIME_TYPES};
use crate::analysis::scoring::ScoringNotice;
use crate::errors::AppError;
use crate::models::analysis::Analysis;
use crate::models::job::JobProfile;
use crate::models::resume::{Resume, ResumeStatus};
use crate::models::skill::{skill_set, SkillSet};
use crate::state::AppState;

/// Multipart field carrying the resume file.
const UPLOAD_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSkillsRequest {
    pub skills: Vec<String>,
    pub resume_id: Option<String>,
}

struct UploadedFile {
    filename: String,
    content_type: String,
    data: bytes::Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes/upload
///
/// Extracts skills from the uploaded file, scores them against the catalog and
/// keeps the analysis for `GET /api/analyses/:resume_id`.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Resume>, AppError> {
    let upload = read_upload(multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if upload.data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if upload.data.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds {} byte limit",
            state.config.max_upload_bytes
        )));
    }
    if !ACCEPTED_MIME_TYPES.contains(&mime_essence(&upload.content_type).as_str()) {
        return Err(AppError::UnsupportedFormat(
            "Invalid file type. Only PDF, Word and plain-text documents are allowed.".to_string(),
        ));
    }

    let skills = state
        .extractor
        .extract(upload.data, &upload.content_type)
        .await?;

    let resume_id = Uuid::new_v4().to_string();
    let analysis = run_analysis(&state, &skills, &resume_id);

    let resume = Resume {
        id: resume_id,
        filename: upload.filename,
        upload_date: analysis.date,
        status: ResumeStatus::Completed,
    };
    info!(
        resume_id = %resume.id,
        filename = %resume.filename,
        skills = analysis.skills.len(),
        "Resume analyzed"
    );
    state.store.insert(resume.clone(), analysis).await;

    Ok(Json(resume))
}

/// GET /api/analyses/:resume_id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<Analysis>, AppError> {
    state
        .store
        .analysis(&resume_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis for resume {resume_id} not found")))
}

/// POST /api/analyses
///
/// Scores an already-extracted skill list. Nothing is stored.
pub async fn handle_score_skills(
    State(state): State<AppState>,
    Json(request): Json<ScoreSkillsRequest>,
) -> Result<Json<Analysis>, AppError> {
    let resume_id = match request.resume_id {
        Some(id) if id.trim().is_empty() => {
            return Err(AppError::Validation("resumeId cannot be blank".to_string()))
        }
        Some(id) => id,
        None => Uuid::new_v4().to_string(),
    };
    let skills = skill_set(&request.skills);
    Ok(Json(run_analysis(&state, &skills, &resume_id)))
}

/// GET /api/resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<Vec<Resume>> {
    Json(state.store.history().await)
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobProfile>> {
    Json(state.catalog.to_vec())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok(Some(UploadedFile {
            filename,
            content_type,
            data,
        }));
    }
    Ok(None)
}

fn run_analysis(state: &AppState, skills: &SkillSet, resume_id: &str) -> Analysis {
    let report = state.engine.score(skills, &state.catalog);
    for notice in &report.notices {
        match notice {
            ScoringNotice::EmptyCatalog => {
                warn!(resume_id, "Job catalog is empty; analysis has no job matches")
            }
            ScoringNotice::DivisionGuard { title } => {
                warn!(resume_id, job = %title, "Skipping job with no required skills")
            }
        }
    }
    assemble_now(report, AnalysisIds::for_resume(resume_id))
}
