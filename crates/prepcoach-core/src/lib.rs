//! Core interview engine, answer review, and command routing for Prepcoach.

mod assistant;
mod catalog;
mod error;
pub mod responses;
mod review;
mod session;
mod store;

pub use assistant::{Assistant, Route};
pub use catalog::{
    sample_questions, tips_for, CompanyKey, CompanyTips, RoleKey, BEHAVIORAL_QUESTIONS,
    GENERIC_TIPS,
};
pub use error::PrepError;
pub use review::review_answer;
pub use session::{
    AdvanceOutcome, SessionEngine, BEHAVIORAL_PER_SESSION, DEFAULT_COMPANY, DEFAULT_ROLE,
    TECHNICAL_PER_SESSION,
};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};

/// Result type for Prepcoach operations.
pub type Result<T> = std::result::Result<T, PrepError>;
