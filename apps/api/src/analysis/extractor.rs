//! Skill Extractor — turns an uploaded resume into a set of skill tokens.
//!
//! `SkillExtractor` is the seam to any text-extraction / tagging backend.
//! `AppState` carries an `Arc<dyn SkillExtractor>`; the default is
//! `KeywordSkillExtractor`, a vocabulary matcher over decoded text.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use bytes::Bytes;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::catalog::skill_guide::{SKILL_ALIASES, SKILL_GUIDES};
use crate::models::job::JobProfile;
use crate::models::skill::{SkillSet, SkillToken};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_MARKDOWN: &str = "text/markdown";

/// MIME types the upload endpoint lets through to the extractor.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOC, MIME_DOCX, MIME_TEXT, MIME_MARKDOWN];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),
}

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, raw: Bytes, mime_type: &str) -> Result<SkillSet, ExtractError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

struct VocabularyTerm {
    skill: SkillToken,
    pattern: Regex,
}

/// Matches known skill names and aliases on word boundaries in lowercased text.
/// A term that is the dotted suffix of another term (`js` in `node.js`) does
/// not match after a `.`; every other term does (`e.g.docker`).
///
/// Vocabulary = catalog skills ∪ skill-guide skills ∪ alias table.
pub struct KeywordSkillExtractor {
    vocabulary: Vec<VocabularyTerm>,
}

impl KeywordSkillExtractor {
    pub fn new(catalog: &[JobProfile]) -> Result<Self, regex::Error> {
        let mut terms: BTreeMap<String, SkillToken> = BTreeMap::new();
        for skill in catalog.iter().flat_map(|j| j.required_skills.iter()) {
            terms.insert(skill.as_str().to_string(), skill.clone());
        }
        for guide in SKILL_GUIDES {
            terms.insert(guide.skill.to_string(), SkillToken::new(guide.skill));
        }
        for (alias, canonical) in SKILL_ALIASES {
            terms
                .entry(alias.to_string())
                .or_insert_with(|| SkillToken::new(canonical));
        }

        let dotted_suffixes: BTreeSet<String> = terms
            .keys()
            .filter_map(|term| term.rsplit_once('.'))
            .map(|(_, suffix)| suffix.to_string())
            .collect();

        let vocabulary = terms
            .into_iter()
            .map(|(term, skill)| -> Result<VocabularyTerm, regex::Error> {
                let leading = if dotted_suffixes.contains(&term) {
                    r"(?:^|[^a-z0-9.])"
                } else {
                    r"(?:^|[^a-z0-9])"
                };
                let pattern = Regex::new(&format!(
                    r"{leading}{}(?:$|[^a-z0-9])",
                    regex::escape(&term)
                ))?;
                Ok(VocabularyTerm { skill, pattern })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(terms = vocabulary.len(), "Skill vocabulary built");
        Ok(Self { vocabulary })
    }

    /// Tags every vocabulary skill present in `text`.
    pub fn tag_skills(&self, text: &str) -> SkillSet {
        let normalized = text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        self.vocabulary
            .iter()
            .filter(|term| term.pattern.is_match(&normalized))
            .map(|term| term.skill.clone())
            .collect()
    }
}

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, raw: Bytes, mime_type: &str) -> Result<SkillSet, ExtractError> {
        let text = decode_text(raw, mime_type).await?;
        if text.trim().is_empty() {
            return Err(ExtractError::ExtractionFailed(
                "no text could be extracted from the resume".to_string(),
            ));
        }
        let skills = self.tag_skills(&text);
        debug!(chars = text.len(), skills = skills.len(), "Resume skills tagged");
        Ok(skills)
    }
}

/// Strips parameters (`; charset=utf-8`) and lowercases a MIME type.
pub fn mime_essence(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

async fn decode_text(raw: Bytes, mime_type: &str) -> Result<String, ExtractError> {
    match mime_essence(mime_type).as_str() {
        MIME_TEXT | MIME_MARKDOWN => String::from_utf8(raw.to_vec()).map_err(|_| {
            ExtractError::ExtractionFailed("resume text is not valid UTF-8".to_string())
        }),
        MIME_PDF => {
            // PDF decoding is CPU-bound; keep it off the async executor.
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&raw))
                .await
                .map_err(|e| ExtractError::ExtractionFailed(format!("PDF decoding aborted: {e}")))?
                .map_err(|e| ExtractError::ExtractionFailed(format!("could not read PDF: {e}")))
        }
        MIME_DOC | MIME_DOCX => Err(ExtractError::UnsupportedFormat(
            "Word documents cannot be analyzed yet; upload a PDF or plain-text resume".to_string(),
        )),
        other => Err(ExtractError::UnsupportedFormat(format!(
            "'{other}' is not a supported resume format"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::skill_set;

    fn extractor() -> KeywordSkillExtractor {
        let catalog = vec![JobProfile {
            title: "Systems Engineer".to_string(),
            required_skills: skill_set(["Rust", "C++"]),
            description: String::new(),
        }];
        KeywordSkillExtractor::new(&catalog).unwrap()
    }

    const RESUME: &str = "Jane Doe\n\
        Senior engineer. Built dashboards in React and TypeScript,\n\
        services on Node.js with PostgreSQL, deployed to Amazon   Web Services\n\
        using K8s. Also wrote Rust and C++ tooling.";

    #[test]
    fn test_tags_canonical_skills_and_aliases() {
        let skills = extractor().tag_skills(RESUME);
        let expected = skill_set([
            "react",
            "typescript",
            "node.js",
            "postgresql",
            "aws",
            "kubernetes",
            "rust",
            "c++",
        ]);
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_word_boundaries_prevent_partial_matches() {
        let skills = extractor().tag_skills("Fluent in JavaScript; no Java here. Trusted by rustaceans.");
        assert!(skills.contains(&SkillToken::new("javascript")));
        assert!(!skills.contains(&SkillToken::new("rust")));
        assert!(!skills.contains(&SkillToken::new("typescript")));
    }

    #[test]
    fn test_skills_after_period_without_space() {
        let skills = extractor().tag_skills("Tools e.g.Docker and Python.React");
        assert_eq!(skills, skill_set(["docker", "python", "react"]));
    }

    #[test]
    fn test_dotted_suffix_alias_not_tagged_inside_longer_term() {
        let skills = extractor().tag_skills("APIs on Node.js; a little JS on the side");
        assert!(skills.contains(&SkillToken::new("node.js")));
        assert!(skills.contains(&SkillToken::new("javascript")));

        let skills = extractor().tag_skills("APIs on Node.js");
        assert!(!skills.contains(&SkillToken::new("javascript")));
    }

    #[test]
    fn test_mime_essence_strips_params() {
        assert_eq!(mime_essence("Text/Plain; charset=utf-8"), "text/plain");
        assert_eq!(mime_essence(MIME_PDF), MIME_PDF);
    }

    #[tokio::test]
    async fn test_extract_plain_text() {
        let skills = extractor()
            .extract(Bytes::from_static(b"Docker, Git and SQL"), "text/plain")
            .await
            .unwrap();
        assert_eq!(skills, skill_set(["docker", "git", "sql"]));
    }

    #[tokio::test]
    async fn test_empty_text_is_extraction_failure() {
        let err = extractor()
            .extract(Bytes::from_static(b"   \n "), "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_extraction_failure() {
        let err = extractor()
            .extract(Bytes::from_static(&[0xff, 0xfe, 0xfd]), "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_extraction_failure() {
        let err = extractor()
            .extract(Bytes::from_static(b"definitely not a pdf"), MIME_PDF)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_word_and_unknown_types_unsupported() {
        let ex = extractor();
        for mime in [MIME_DOC, MIME_DOCX, "image/png"] {
            let err = ex
                .extract(Bytes::from_static(b"React"), mime)
                .await
                .unwrap_err();
            assert!(matches!(err, ExtractError::UnsupportedFormat(_)), "{mime}");
        }
    }
}
