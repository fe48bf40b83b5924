use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::analysis::Analysis;
use crate::models::resume::Resume;

pub const DEFAULT_MAX_HISTORY: usize = 1000;

#[derive(Debug, Clone)]
struct StoredResume {
    resume: Resume,
    analysis: Analysis,
}

/// In-memory record of uploaded resumes and their analyses, keyed by resume id.
/// Holds at most `max_history` entries; nothing is written to disk.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    inner: Arc<RwLock<HashMap<String, StoredResume>>>,
    max_history: usize,
}

impl ResumeStore {
    pub fn new(max_history: usize) -> Self {
        Self {
            inner: Arc::default(),
            max_history,
        }
    }

    /// Stores an upload, evicting the oldest uploads once the cap is exceeded.
    pub async fn insert(&self, resume: Resume, analysis: Analysis) {
        let mut guard = self.inner.write().await;
        guard.insert(resume.id.clone(), StoredResume { resume, analysis });

        while guard.len() > self.max_history {
            // Oldest = last entry in `history()` order.
            let Some(oldest) = guard
                .values()
                .min_by(|a, b| {
                    a.resume
                        .upload_date
                        .cmp(&b.resume.upload_date)
                        .then_with(|| b.resume.id.cmp(&a.resume.id))
                })
                .map(|stored| stored.resume.id.clone())
            else {
                break;
            };
            guard.remove(&oldest);
            debug!(resume_id = %oldest, "Evicted oldest resume from history");
        }
    }

    pub async fn analysis(&self, resume_id: &str) -> Option<Analysis> {
        let guard = self.inner.read().await;
        guard.get(resume_id).map(|stored| stored.analysis.clone())
    }

    /// Upload history, newest first.
    pub async fn history(&self) -> Vec<Resume> {
        let guard = self.inner.read().await;
        let mut resumes: Vec<Resume> = guard.values().map(|s| s.resume.clone()).collect();
        resumes.sort_by(|a, b| {
            b.upload_date
                .cmp(&a.upload_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        resumes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::assembler::{assemble, AnalysisIds};
    use crate::analysis::scoring::ScoringEngine;
    use crate::models::resume::ResumeStatus;
    use crate::models::skill::SkillSet;
    use chrono::{Duration, TimeZone, Utc};

    fn resume(id: &str, minutes: i64) -> (Resume, Analysis) {
        let date = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap() + Duration::minutes(minutes);
        let resume = Resume {
            id: id.to_string(),
            filename: format!("{id}.pdf"),
            upload_date: date,
            status: ResumeStatus::Completed,
        };
        let report = ScoringEngine::default().score(&SkillSet::new(), &[]);
        let analysis = assemble(report, AnalysisIds::for_resume(id), date);
        (resume, analysis)
    }

    #[tokio::test]
    async fn test_insert_and_fetch_analysis() {
        let store = ResumeStore::new(DEFAULT_MAX_HISTORY);
        let (r, a) = resume("r-1", 0);
        store.insert(r, a).await;

        let fetched = store.analysis("r-1").await.unwrap();
        assert_eq!(fetched.id, "analysis-r-1");
        assert!(store.analysis("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let store = ResumeStore::new(DEFAULT_MAX_HISTORY);
        for (id, minutes) in [("old", 0), ("newest", 20), ("middle", 10)] {
            let (r, a) = resume(id, minutes);
            store.insert(r, a).await;
        }

        let ids: Vec<String> = store.history().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["newest", "middle", "old"]);
    }

    #[tokio::test]
    async fn test_history_cap_evicts_oldest_upload() {
        let cap = 3;
        let store = ResumeStore::new(cap);
        // Inserted out of date order; "first" is the oldest upload.
        for (id, minutes) in [("second", 10), ("first", 0), ("third", 20), ("fourth", 30)] {
            let (r, a) = resume(id, minutes);
            store.insert(r, a).await;
        }

        let ids: Vec<String> = store.history().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), cap);
        assert_eq!(ids, vec!["fourth", "third", "second"]);
        assert!(store.analysis("first").await.is_none());
        assert!(store.analysis("second").await.is_some());
    }

    #[tokio::test]
    async fn test_reinserting_same_id_does_not_evict() {
        let store = ResumeStore::new(1);
        for minutes in [0, 5] {
            let (r, a) = resume("only", minutes);
            store.insert(r, a).await;
        }
        assert_eq!(store.history().await.len(), 1);
        assert!(store.analysis("only").await.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = ResumeStore::new(DEFAULT_MAX_HISTORY);
        let handle = store.clone();
        let (r, a) = resume("shared", 0);
        handle.insert(r, a).await;
        assert_eq!(store.history().await.len(), 1);
    }
}
