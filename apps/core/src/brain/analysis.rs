//! Output structures of a turn analysis.

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use super::sentiment::SentimentResult;

/// A named entity found in the utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    /// `PER`, `LOC`, `ORG` or `MISC`
    pub label: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

/// Normalized form of the utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessedText {
    pub original: String,
    pub clean_text: String,
    pub tokens: Vec<String>,
}

/// Complete analysis of one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub entities: Vec<Entity>,
    pub sentiment: SentimentResult,
    pub intent: Intent,
    pub preprocessed: PreprocessedText,
}
