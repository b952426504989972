//! Mock interview session lifecycle.

use crate::catalog::{sample_questions, RoleKey, BEHAVIORAL_QUESTIONS};
use crate::{DocumentStore, PrepError, Result};
use chrono::Utc;
use prepcoach_types::{HistoryEntry, InterviewSession};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_COMPANY: &str = "General";
pub const DEFAULT_ROLE: &str = "Software Engineer";

/// Behavioral questions drawn for each session.
pub const BEHAVIORAL_PER_SESSION: usize = 3;
/// Technical questions drawn for each session.
pub const TECHNICAL_PER_SESSION: usize = 2;

/// What happened when the cursor moved forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The session is still live and now points at its next question.
    Next(InterviewSession),
    /// The last question was passed; the session moved to history.
    Completed(HistoryEntry),
}

/// Creates, advances, and finalizes interview sessions.
#[derive(Clone)]
pub struct SessionEngine {
    store: Arc<dyn DocumentStore>,
}

impl SessionEngine {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Start a new session with 3 behavioral and 2 role-specific questions.
    pub fn start_session(&self, company: Option<&str>, role: Option<&str>) -> Result<InterviewSession> {
        let company = non_blank(company).unwrap_or(DEFAULT_COMPANY);
        let role = non_blank(role).unwrap_or(DEFAULT_ROLE);

        let role_key = match RoleKey::lookup(role) {
            Some(key) => key,
            None => {
                debug!(target: "prepcoach::session", "Unknown role '{}', using general questions", role);
                RoleKey::General
            }
        };

        let mut rng = rand::thread_rng();
        let mut questions = sample_questions(&mut rng, BEHAVIORAL_QUESTIONS, BEHAVIORAL_PER_SESSION);
        questions.extend(sample_questions(&mut rng, role_key.questions(), TECHNICAL_PER_SESSION));

        let session = InterviewSession {
            id: Uuid::now_v7().to_string(),
            company: company.to_string(),
            role: role.to_string(),
            questions,
            current_index: 0,
            answers: Vec::new(),
            started_at: Utc::now(),
        };

        let mut document = self.store.load();
        document.sessions.insert(session.id.clone(), session.clone());
        self.store.save(&document)?;

        info!(
            target: "prepcoach::session",
            "Started session {} ({} / {}) with {} questions",
            session.id,
            session.company,
            session.role,
            session.questions.len()
        );
        Ok(session)
    }

    /// Record an answer for a live session. The cursor does not move.
    pub fn submit_answer(&self, session_id: &str, answer: &str) -> Result<InterviewSession> {
        let mut document = self.store.load();
        let session = document
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| PrepError::SessionNotFound(session_id.to_string()))?;

        if session.answers.len() >= session.questions.len() {
            return Err(PrepError::AllQuestionsAnswered(session_id.to_string()));
        }

        session.answers.push(answer.to_string());
        let updated = session.clone();
        self.store.save(&document)?;

        debug!(
            target: "prepcoach::session",
            "Recorded answer {} for session {}",
            updated.answers.len(),
            session_id
        );
        Ok(updated)
    }

    /// Move to the next question, finalizing the session after the last one.
    pub fn advance(&self, session_id: &str) -> Result<AdvanceOutcome> {
        let mut document = self.store.load();
        let session = document
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| PrepError::SessionNotFound(session_id.to_string()))?;

        session.current_index += 1;

        if session.is_live() {
            let updated = session.clone();
            self.store.save(&document)?;
            debug!(
                target: "prepcoach::session",
                "Session {} advanced to question {}",
                session_id,
                updated.current_index + 1
            );
            return Ok(AdvanceOutcome::Next(updated));
        }

        // Removal and history append land in the same write
        let Some(finished) = document.sessions.remove(session_id) else {
            return Err(PrepError::SessionNotFound(session_id.to_string()));
        };
        let entry = HistoryEntry {
            date: Utc::now().date_naive(),
            company: finished.company,
            role: finished.role,
            questions_answered: finished.answers.len(),
        };
        document.history.push(entry.clone());
        self.store.save(&document)?;

        info!(
            target: "prepcoach::session",
            "Session {} complete: {} answers recorded",
            session_id,
            entry.questions_answered
        );
        Ok(AdvanceOutcome::Completed(entry))
    }

    /// Look up a live session.
    pub fn get_session(&self, session_id: &str) -> Result<InterviewSession> {
        self.store
            .load()
            .sessions
            .remove(session_id)
            .ok_or_else(|| PrepError::SessionNotFound(session_id.to_string()))
    }

    /// Completed sessions, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.store.load().history
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
