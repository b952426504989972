//! Answer review results.

use serde::{Deserialize, Serialize};

/// How an answer's length compares to the recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthAssessment {
    /// Fewer than 50 words.
    TooShort,
    /// Between 50 and 250 words inclusive.
    Good,
    /// More than 250 words.
    TooLong,
}

/// Which STAR elements an answer appears to mention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarChecklist {
    pub situation: bool,
    pub task: bool,
    pub action: bool,
    pub result: bool,
}

impl StarChecklist {
    /// True when all four elements were found.
    pub fn is_complete(&self) -> bool {
        self.situation && self.task && self.action && self.result
    }
}

/// Overall STAR verdict for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarVerdict {
    Complete,
    Incomplete,
}

/// Structured feedback for a single answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerReview {
    pub word_count: usize,
    pub sentence_count: usize,
    pub length: LengthAssessment,
    pub star: StarChecklist,
    pub verdict: StarVerdict,
}
