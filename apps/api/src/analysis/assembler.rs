//! Result Assembler — maps a `ScoreReport` onto the `Analysis` record handed to callers.
//! Formatting and stamping only; every number comes from the scoring engine.

use chrono::{DateTime, Utc};

use crate::analysis::scoring::{Improvement, ScoreReport, Strength};
use crate::models::analysis::{Analysis, ImprovementDetail, JobMatch, MatchTier};

/// Caller-supplied identifiers for an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisIds {
    pub id: String,
    pub resume_id: String,
}

impl AnalysisIds {
    /// `analysis-<resume id>`, the id scheme the upload API exposes.
    pub fn for_resume(resume_id: &str) -> Self {
        Self {
            id: format!("analysis-{resume_id}"),
            resume_id: resume_id.to_string(),
        }
    }
}

pub fn assemble(report: ScoreReport, ids: AnalysisIds, date: DateTime<Utc>) -> Analysis {
    let recommended_jobs = report
        .matches
        .into_iter()
        .map(|scored| JobMatch {
            match_tier: MatchTier::from_percentage(scored.percentage),
            match_percentage: scored.percentage,
            job: scored.job,
        })
        .collect();

    let strengths = report.strengths.iter().map(format_strength).collect();
    let improvements = report
        .improvements
        .iter()
        .map(|i| i.suggestion.clone())
        .collect();
    let improvement_details = report.improvements.into_iter().map(to_detail).collect();

    Analysis {
        id: ids.id,
        resume_id: ids.resume_id,
        skills: report.skills,
        missing_skills: report.missing_skills,
        recommended_jobs,
        strengths,
        improvements,
        improvement_details,
        date,
    }
}

/// Assembles with the current time as the analysis date.
pub fn assemble_now(report: ScoreReport, ids: AnalysisIds) -> Analysis {
    assemble(report, ids, Utc::now())
}

fn format_strength(strength: &Strength) -> String {
    let skills: Vec<&str> = strength.skills.iter().map(|s| s.as_str()).collect();
    format!("Strong {} skills: {}", strength.category, skills.join(", "))
}

fn to_detail(improvement: Improvement) -> ImprovementDetail {
    ImprovementDetail {
        skill: improvement.skill.into(),
        suggestion: improvement.suggestion,
        description: improvement.description,
        resources: improvement.resources,
    }
}
