//! Shared types for the Prepcoach interview assistant.

mod review;
mod session;

pub use review::*;
pub use session::*;
