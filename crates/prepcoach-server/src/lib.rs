//! Prepcoach server library - HTTP front end and one-shot CLI support.
//!
//! Kept separate from main.rs so integration tests can build the router.

pub mod config;
pub mod logging;
pub mod routes;
pub mod state;
