use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized skill identifier: trimmed, lowercased, inner whitespace collapsed.
/// Two tokens built from "Node.js" and " node.JS " compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SkillToken(String);

/// Ordered, deduplicated set of skills. Ordering keeps output deterministic.
pub type SkillSet = BTreeSet<SkillToken>;

impl SkillToken {
    pub fn new(raw: &str) -> Self {
        let normalized = raw
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SkillToken {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for SkillToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<SkillToken> for String {
    fn from(token: SkillToken) -> Self {
        token.0
    }
}

impl fmt::Display for SkillToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a skill set from raw strings, dropping entries that normalize to nothing.
pub fn skill_set<I, S>(raw: I) -> SkillSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|s| SkillToken::new(s.as_ref()))
        .filter(|t| !t.is_empty())
        .collect()
}
