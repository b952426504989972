//! Text command routing.
//!
//! Messages are matched against an ordered list of keyword rules. Rules
//! overlap, so the first match wins. Parameters (company, role, answer text)
//! are pulled out of the incoming message with the regexes below.

use crate::catalog::{sample_questions, tips_for, RoleKey, BEHAVIORAL_QUESTIONS};
use crate::session::DEFAULT_ROLE;
use crate::{
    responses, review_answer, AdvanceOutcome, DocumentStore, PrepError, Result, SessionEngine,
};
use once_cell::sync::Lazy;
use prepcoach_types::InterviewSession;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, error};

/// Questions listed by the behavioral and technical practice commands.
const PRACTICE_QUESTION_COUNT: usize = 5;

static START_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:for|at|with)\s+(.+?)(?:\s+as|\s*$)").expect("Invalid company regex")
});

static START_ROLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)as\s+(.+?)$").expect("Invalid role regex"));

static TECHNICAL_ROLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)for\s+(.+?)$").expect("Invalid technical role regex"));

static REVIEW_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)review\s+(?:my\s+)?answer:?\s*").expect("Invalid review prefix regex")
});

// \b keeps "company tips" from backtracking into a company named "s"
static TIPS_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:tips for|company tips?)\b\s*:?\s*(.+)$").expect("Invalid tips regex")
});

/// The command a message resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    StartInterview,
    StarMethod,
    BehavioralQuestions,
    TechnicalQuestions,
    ReviewAnswer,
    CompanyTips,
    History,
    SessionAnswer,
    Help,
}

type Predicate = fn(&str) -> bool;

/// Routing table, checked top to bottom against the lower-cased message.
const RULES: &[(Route, Predicate)] = &[
    (Route::StartInterview, wants_interview),
    (Route::StarMethod, wants_star_method),
    (Route::BehavioralQuestions, wants_behavioral),
    (Route::TechnicalQuestions, wants_technical),
    (Route::ReviewAnswer, wants_review),
    (Route::CompanyTips, wants_company_tips),
    (Route::History, wants_history),
    (Route::SessionAnswer, wants_session_answer),
];

fn wants_interview(m: &str) -> bool {
    m.contains("start mock interview") || m.contains("start interview") || m.contains("begin interview")
}

fn wants_star_method(m: &str) -> bool {
    m.contains("star method")
}

fn wants_behavioral(m: &str) -> bool {
    m.contains("behavioral") || m.contains("common questions")
}

fn wants_technical(m: &str) -> bool {
    m.contains("technical") || m.contains("coding questions")
}

fn wants_review(m: &str) -> bool {
    m.contains("review") && (m.contains("answer") || m.contains("my"))
}

fn wants_company_tips(m: &str) -> bool {
    m.contains("company tips") || m.contains("tips for")
}

fn wants_history(m: &str) -> bool {
    m.contains("history") || m.contains("past interviews")
}

fn wants_session_answer(m: &str) -> bool {
    m.contains("session") && m.contains("answer")
}

/// Conversational front end over the session engine, analyzer, and catalog.
#[derive(Clone)]
pub struct Assistant {
    engine: SessionEngine,
}

impl Assistant {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            engine: SessionEngine::new(store),
        }
    }

    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    /// Pick the rule a message falls under.
    pub fn route(message: &str) -> Route {
        let lower = message.to_lowercase();
        RULES
            .iter()
            .find(|(_, matches)| matches(&lower))
            .map(|(route, _)| *route)
            .unwrap_or(Route::Help)
    }

    /// Answer a single message. Always produces a reply.
    pub fn handle(&self, message: &str) -> String {
        let route = Self::route(message);
        debug!(target: "prepcoach::router", "Routing message to {:?}", route);

        match route {
            Route::StartInterview => {
                let company = capture(&START_COMPANY_RE, message);
                let role = capture(&START_ROLE_RE, message);
                match self.start_interview(company, role) {
                    Ok((_, reply)) => reply,
                    Err(e) => Self::error_reply(&e),
                }
            }
            Route::StarMethod => responses::star_method(),
            Route::BehavioralQuestions => {
                let questions =
                    sample_questions(&mut rand::thread_rng(), BEHAVIORAL_QUESTIONS, PRACTICE_QUESTION_COUNT);
                responses::behavioral_questions(&questions)
            }
            Route::TechnicalQuestions => {
                let role = capture(&TECHNICAL_ROLE_RE, message).unwrap_or(DEFAULT_ROLE);
                let questions = sample_questions(
                    &mut rand::thread_rng(),
                    RoleKey::resolve(role).questions(),
                    PRACTICE_QUESTION_COUNT,
                );
                responses::technical_questions(role, &questions)
            }
            Route::ReviewAnswer => {
                let answer = REVIEW_PREFIX_RE.replace(message, "");
                let answer = answer.trim();
                if answer.is_empty() {
                    responses::review_instructions()
                } else {
                    responses::answer_review(&review_answer(answer))
                }
            }
            Route::CompanyTips => match capture(&TIPS_COMPANY_RE, message)
                .map(|c| c.trim_start_matches(':').trim())
                .filter(|c| !c.is_empty())
            {
                Some(company) => responses::company_tips(company, tips_for(company)),
                None => responses::company_list(),
            },
            Route::History => responses::history(&self.engine.history()),
            Route::SessionAnswer => responses::submit_instructions(),
            Route::Help => responses::help(),
        }
    }

    /// Start a session. Returns it with the greeting and first question.
    pub fn start_interview(
        &self,
        company: Option<&str>,
        role: Option<&str>,
    ) -> Result<(InterviewSession, String)> {
        let session = self.engine.start_session(company, role)?;
        let reply = responses::session_started(&session);
        Ok((session, reply))
    }

    /// Record an answer for a session.
    pub fn submit_answer(&self, session_id: &str, answer: &str) -> Result<String> {
        self.engine.submit_answer(session_id, answer)?;
        Ok(responses::answer_recorded())
    }

    /// Move a session to its next question, or finish it.
    pub fn next_question(&self, session_id: &str) -> Result<(AdvanceOutcome, String)> {
        let outcome = self.engine.advance(session_id)?;
        let reply = match &outcome {
            AdvanceOutcome::Next(session) => responses::next_question(session),
            AdvanceOutcome::Completed(entry) => responses::interview_complete(entry),
        };
        Ok((outcome, reply))
    }

    /// Reply text for a failed operation.
    pub fn error_reply(error: &PrepError) -> String {
        match error {
            PrepError::SessionNotFound(id) => {
                debug!(target: "prepcoach::session", "Session {} not found", id);
                responses::session_not_found()
            }
            PrepError::AllQuestionsAnswered(_) => responses::all_questions_answered(),
            other => {
                error!(target: "prepcoach::store", "Operation failed: {}", other);
                responses::storage_failure()
            }
        }
    }
}

fn capture<'a>(re: &Regex, message: &'a str) -> Option<&'a str> {
    re.captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}
