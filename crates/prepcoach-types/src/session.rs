//! Interview session types and the persisted store document.
//!
//! Field names serialize in camelCase (`currentIndex`, `startedAt`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mock interview in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    /// Opaque identifier, fixed at creation. Callers must not parse it.
    pub id: String,
    /// Company the candidate is practicing for (e.g., "Google").
    pub company: String,
    /// Role the candidate is practicing for (e.g., "Data Scientist").
    pub role: String,
    /// Questions drawn at creation, asked in order.
    pub questions: Vec<String>,
    /// Cursor into `questions`. Never decreases.
    pub current_index: usize,
    /// Recorded answers, in submission order.
    #[serde(default)]
    pub answers: Vec<String>,
    /// When the session was created.
    pub started_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Question under the cursor, if the session is still live.
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.current_index).map(String::as_str)
    }

    /// Total number of questions in this session.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// A session is live until the cursor reaches the end of its questions.
    pub fn is_live(&self) -> bool {
        self.current_index < self.questions.len()
    }
}

/// Summary of a completed session. Written once, never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Completion day (UTC).
    pub date: NaiveDate,
    pub company: String,
    pub role: String,
    /// Answers recorded before completion; may be less than the question
    /// count when questions were skipped.
    pub questions_answered: usize,
}

/// Everything the assistant persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Live sessions keyed by id.
    #[serde(default)]
    pub sessions: BTreeMap<String, InterviewSession>,
    /// Completed sessions, oldest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> InterviewSession {
        InterviewSession {
            id: "lq3k9x2abcd".to_string(),
            company: "Google".to_string(),
            role: "Data Scientist".to_string(),
            questions: vec!["Q1".to_string(), "Q2".to_string()],
            current_index: 0,
            answers: Vec::new(),
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_current_question_follows_cursor() {
        let mut session = sample_session();
        assert_eq!(session.current_question(), Some("Q1"));
        assert!(session.is_live());

        session.current_index = 2;
        assert_eq!(session.current_question(), None);
        assert!(!session.is_live());
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let mut doc = StoreDocument::default();
        let session = sample_session();
        doc.sessions.insert(session.id.clone(), session);
        doc.history.push(HistoryEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            company: "Meta".to_string(),
            role: "Designer".to_string(),
            questions_answered: 4,
        });

        let json = serde_json::to_value(&doc).unwrap();
        let stored = &json["sessions"]["lq3k9x2abcd"];
        assert_eq!(stored["currentIndex"], 0);
        assert!(stored["startedAt"].is_string());
        assert_eq!(json["history"][0]["questionsAnswered"], 4);
        assert_eq!(json["history"][0]["date"], "2024-03-01");
    }

    #[test]
    fn test_document_missing_fields_default_to_empty() {
        let doc: StoreDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.sessions.is_empty());
        assert!(doc.history.is_empty());
    }
}
