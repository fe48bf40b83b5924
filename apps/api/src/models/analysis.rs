use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::JobProfile;
use crate::models::skill::SkillSet;

/// Coarse label for a match percentage: strong ≥ 80, moderate ≥ 60, low otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Low,
}

impl MatchTier {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            MatchTier::Strong
        } else if percentage >= 60 {
            MatchTier::Moderate
        } else {
            MatchTier::Low
        }
    }
}

/// One job scored against a resume. Serialized with the job fields flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    #[serde(flatten)]
    pub job: JobProfile,
    pub match_percentage: u8, // 0 – 100
    pub match_tier: MatchTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementDetail {
    pub skill: String,
    pub suggestion: String,
    pub description: String,
    pub resources: Vec<String>,
}

/// The complete result of scoring one resume. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: String,
    pub resume_id: String,
    pub skills: SkillSet,
    pub missing_skills: SkillSet,
    pub recommended_jobs: Vec<JobMatch>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub improvement_details: Vec<ImprovementDetail>,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::skill_set;

    #[test]
    fn test_match_tier_thresholds() {
        assert_eq!(MatchTier::from_percentage(100), MatchTier::Strong);
        assert_eq!(MatchTier::from_percentage(80), MatchTier::Strong);
        assert_eq!(MatchTier::from_percentage(79), MatchTier::Moderate);
        assert_eq!(MatchTier::from_percentage(60), MatchTier::Moderate);
        assert_eq!(MatchTier::from_percentage(59), MatchTier::Low);
        assert_eq!(MatchTier::from_percentage(0), MatchTier::Low);
    }

    #[test]
    fn test_job_match_serializes_flat_camel_case() {
        let m = JobMatch {
            job: JobProfile {
                title: "Frontend Developer".to_string(),
                required_skills: skill_set(["React", "CSS"]),
                description: "Build user interfaces".to_string(),
            },
            match_percentage: 85,
            match_tier: MatchTier::Strong,
        };
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["title"], "Frontend Developer");
        assert_eq!(value["matchPercentage"], 85);
        assert_eq!(value["matchTier"], "strong");
        assert_eq!(value["requiredSkills"], serde_json::json!(["css", "react"]));
        assert!(value.get("job").is_none());
    }
}
