use serde::{Deserialize, Serialize};

use crate::models::skill::SkillSet;

/// Reference record describing a role and the skills it requires.
/// Owned by the job catalog and never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    pub title: String,
    #[serde(default)]
    pub required_skills: SkillSet,
    #[serde(default)]
    pub description: String,
}
