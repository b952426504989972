//! Shared application state.

use crate::config::Config;
use prepcoach_core::{Assistant, DocumentStore, JsonFileStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared application state.
///
/// Every request goes through the one assistant lock, so each
/// load-modify-save cycle finishes before the next one starts.
pub struct AppState {
    assistant: Mutex<Assistant>,
    pub config: Config,
}

impl AppState {
    /// State backed by the JSON document at `config.data_path`.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_path.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            assistant: Mutex::new(Assistant::new(store)),
            config,
        }
    }

    /// Exclusive access to the assistant for one operation.
    pub fn assistant(&self) -> MutexGuard<'_, Assistant> {
        // The assistant holds no in-memory state a panic could corrupt
        self.assistant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
