// Job catalog: reference job profiles loaded once at startup, plus the static
// skill guide used for strengths categories and improvement suggestions.

pub mod skill_guide;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::job::JobProfile;

/// Catalog compiled into the binary, used when `JOB_CATALOG_PATH` is unset.
const DEFAULT_CATALOG: &str = include_str!("../../data/job_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Job #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Job '{title}' lists an empty skill")]
    EmptySkill { title: String },

    #[error("Duplicate job title '{0}'")]
    DuplicateTitle(String),
}

/// Loads the job catalog from `path`, or the embedded default when `None`.
///
/// Jobs with no required skills are accepted here; the scoring engine skips them.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<JobProfile>, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let jobs = parse_catalog(&raw)?;
            info!(path = %path.display(), jobs = jobs.len(), "Job catalog loaded from file");
            jobs
        }
        None => {
            let jobs = parse_catalog(DEFAULT_CATALOG)?;
            info!(jobs = jobs.len(), "Job catalog loaded from embedded default");
            jobs
        }
    };
    Ok(catalog)
}

/// Parses and validates a JSON array of job profiles.
pub fn parse_catalog(raw: &str) -> Result<Vec<JobProfile>, CatalogError> {
    let jobs: Vec<JobProfile> = serde_json::from_str(raw)?;

    let mut titles = HashSet::new();
    for (index, job) in jobs.iter().enumerate() {
        let title = job.title.trim();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle { index });
        }
        if job.required_skills.iter().any(|s| s.is_empty()) {
            return Err(CatalogError::EmptySkill {
                title: title.to_string(),
            });
        }
        if !titles.insert(title.to_lowercase()) {
            return Err(CatalogError::DuplicateTitle(title.to_string()));
        }
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::SkillToken;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_valid() {
        let jobs = load_catalog(None).unwrap();
        assert!(!jobs.is_empty());
        let frontend = jobs
            .iter()
            .find(|j| j.title == "Frontend Developer")
            .unwrap();
        assert!(frontend.required_skills.contains(&SkillToken::new("react")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Rust Engineer", "requiredSkills": ["Rust", "Linux"], "description": "Systems work"}}]"#
        )
        .unwrap();

        let jobs = load_catalog(Some(file.path())).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].required_skills.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = parse_catalog(r#"[{"title": "  ", "requiredSkills": ["rust"]}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle { index: 0 }));
    }

    #[test]
    fn test_blank_skill_rejected() {
        let err = parse_catalog(r#"[{"title": "Dev", "requiredSkills": ["rust", " "]}]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptySkill { .. }));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let err = parse_catalog(
            r#"[{"title": "Dev", "requiredSkills": ["a"]}, {"title": "dev", "requiredSkills": ["b"]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTitle(_)));
    }

    #[test]
    fn test_job_without_skills_loads() {
        let jobs = parse_catalog(r#"[{"title": "Generalist"}]"#).unwrap();
        assert!(jobs[0].required_skills.is_empty());
        assert!(jobs[0].description.is_empty());
    }
}
