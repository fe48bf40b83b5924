use std::sync::Arc;

use crate::analysis::extractor::SkillExtractor;
use crate::analysis::scoring::ScoringEngine;
use crate::analysis::store::ResumeStore;
use crate::config::Config;
use crate::models::job::JobProfile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only catalog snapshot; scoring never takes a lock.
    pub catalog: Arc<[JobProfile]>,
    pub engine: ScoringEngine,
    /// Pluggable extractor. Default: KeywordSkillExtractor.
    pub extractor: Arc<dyn SkillExtractor>,
    pub store: ResumeStore,
}
