//! Scoring Engine — measures an extracted skill set against the job catalog.
//!
//! Pure and synchronous: takes an immutable skill set and catalog snapshot,
//! returns a fresh `ScoreReport`. No shared state, safe to call concurrently.
//!
//! Algorithm:
//! 1. match% = round(100 × |skills ∩ required| / |required|) per job;
//!    jobs with no required skills are skipped (DivisionGuard notice)
//! 2. Stable sort by match% descending, ties keep catalog order
//! 3. missing = ∪ (required − skills) over the top-K matches
//! 4. strengths = extracted skills required by at least one top-K match,
//!    grouped by skill-guide category
//! 5. improvements = one suggestion per missing skill, via the skill guide

use crate::catalog::skill_guide::{self, FALLBACK_DESCRIPTION};
use crate::models::job::JobProfile;
use crate::models::skill::{SkillSet, SkillToken};

pub const DEFAULT_TOP_K: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Report models
// ────────────────────────────────────────────────────────────────────────────

/// One catalog job with its overlap against the extracted skills.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredJob {
    pub job: JobProfile,
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub percentage: u8, // 0 – 100
}

/// Extracted skills that carry weight for the top matches, grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct Strength {
    pub category: &'static str,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    pub skill: SkillToken,
    pub suggestion: String,
    pub description: String,
    pub resources: Vec<String>,
}

/// Non-fatal conditions met while scoring. The caller decides how to log them.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringNotice {
    EmptyCatalog,
    DivisionGuard { title: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub skills: SkillSet,
    pub matches: Vec<ScoredJob>,
    pub missing_skills: SkillSet,
    pub strengths: Vec<Strength>,
    pub improvements: Vec<Improvement>,
    pub notices: Vec<ScoringNotice>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    top_k: usize,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ScoringEngine {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn score(&self, extracted: &SkillSet, catalog: &[JobProfile]) -> ScoreReport {
        let mut notices = Vec::new();
        if catalog.is_empty() {
            notices.push(ScoringNotice::EmptyCatalog);
        }

        let mut matches = Vec::with_capacity(catalog.len());
        for job in catalog {
            match score_job(extracted, job) {
                Some(scored) => matches.push(scored),
                None => notices.push(ScoringNotice::DivisionGuard {
                    title: job.title.clone(),
                }),
            }
        }

        // Vec::sort_by is stable: equal percentages keep catalog order.
        matches.sort_by(|a, b| b.percentage.cmp(&a.percentage));

        let top = &matches[..self.top_k.min(matches.len())];

        let missing_skills: SkillSet = top
            .iter()
            .flat_map(|m| m.missing.iter().cloned())
            .collect();
        let strengths = collect_strengths(top);
        let improvements = collect_improvements(top);

        ScoreReport {
            skills: extracted.clone(),
            matches,
            missing_skills,
            strengths,
            improvements,
            notices,
        }
    }
}

/// Returns `None` when the job lists no required skills (ratio undefined).
pub fn match_percentage(extracted: &SkillSet, required: &SkillSet) -> Option<u8> {
    if required.is_empty() {
        return None;
    }
    let overlap = required.intersection(extracted).count();
    let ratio = overlap as f64 / required.len() as f64;
    Some((ratio * 100.0).round().clamp(0.0, 100.0) as u8)
}

fn score_job(extracted: &SkillSet, job: &JobProfile) -> Option<ScoredJob> {
    let percentage = match_percentage(extracted, &job.required_skills)?;
    let matched = job
        .required_skills
        .intersection(extracted)
        .cloned()
        .collect();
    let missing = job
        .required_skills
        .difference(extracted)
        .cloned()
        .collect();
    Some(ScoredJob {
        job: job.clone(),
        matched,
        missing,
        percentage,
    })
}

/// Categories appear in the order first met walking the top matches by rank.
fn collect_strengths(top: &[ScoredJob]) -> Vec<Strength> {
    let mut strengths: Vec<Strength> = Vec::new();
    for scored in top {
        for skill in &scored.matched {
            let category = skill_guide::category_for(skill);
            match strengths.iter().position(|s| s.category == category) {
                Some(index) => {
                    strengths[index].skills.insert(skill.clone());
                }
                None => strengths.push(Strength {
                    category,
                    skills: SkillSet::from([skill.clone()]),
                }),
            }
        }
    }
    strengths
}

/// Gaps of the best match come first; each skill is suggested once.
fn collect_improvements(top: &[ScoredJob]) -> Vec<Improvement> {
    let mut seen = SkillSet::new();
    let mut improvements = Vec::new();
    for scored in top {
        for skill in &scored.missing {
            if seen.insert(skill.clone()) {
                improvements.push(improvement_for(skill));
            }
        }
    }
    improvements
}

fn improvement_for(skill: &SkillToken) -> Improvement {
    match skill_guide::lookup(skill) {
        Some(guide) => Improvement {
            skill: skill.clone(),
            suggestion: guide.suggestion.to_string(),
            description: guide.description.to_string(),
            resources: guide.resources.iter().map(|r| r.to_string()).collect(),
        },
        None => Improvement {
            skill: skill.clone(),
            suggestion: skill_guide::fallback_suggestion(skill),
            description: FALLBACK_DESCRIPTION.to_string(),
            resources: vec![],
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
