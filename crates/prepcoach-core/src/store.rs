//! Persistence for the interview document.

use crate::{PrepError, Result};
use prepcoach_types::StoreDocument;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Whole-document storage. Every mutation is a full load, modify, save cycle.
pub trait DocumentStore: Send + Sync {
    /// Load the current document. Missing or unreadable content yields an
    /// empty document rather than an error.
    fn load(&self) -> StoreDocument;

    /// Replace the stored document.
    fn save(&self, document: &StoreDocument) -> Result<()>;
}

/// JSON file-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document.
    ///
    /// Returns `Ok(None)` when the file does not exist or is blank, and
    /// [`PrepError::StoreCorrupt`] when it cannot be parsed.
    pub fn read(&self) -> Result<Option<StoreDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| PrepError::StoreCorrupt(e.to_string()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> StoreDocument {
        match self.read() {
            Ok(Some(document)) => document,
            Ok(None) => {
                debug!(target: "prepcoach::store", "No document at {}, starting empty", self.path.display());
                StoreDocument::default()
            }
            Err(e) => {
                warn!(target: "prepcoach::store", "Discarding unreadable document at {}: {}", self.path.display(), e);
                StoreDocument::default()
            }
        }
    }

    fn save(&self, document: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;

        // Write beside the target, then rename over it
        let tmp_path = self.temp_path();
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;

        debug!(
            target: "prepcoach::store",
            "Saved {} live sessions and {} history entries",
            document.sessions.len(),
            document.history.len()
        );
        Ok(())
    }
}

/// In-memory store for tests and throwaway runs.
///
/// Clones share the same document, so a test can keep a handle and inspect
/// what the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<Mutex<StoreDocument>>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: StoreDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of completed `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StoreDocument {
        match self.document.lock() {
            Ok(document) => document.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, document: &StoreDocument) -> Result<()> {
        let mut guard = match self.document.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = document.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use prepcoach_types::{HistoryEntry, InterviewSession};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn sample_document() -> StoreDocument {
        let mut document = StoreDocument::default();
        let session = InterviewSession {
            id: Uuid::now_v7().to_string(),
            company: "Amazon".to_string(),
            role: "Product Manager".to_string(),
            questions: vec!["Why Amazon?".to_string(), "Describe a launch.".to_string()],
            current_index: 1,
            answers: vec!["Because of the leadership principles.".to_string()],
            started_at: Utc::now(),
        };
        document.sessions.insert(session.id.clone(), session);
        for (day, company) in [(1, "Google"), (2, "Meta"), (3, "Apple")] {
            document.history.push(HistoryEntry {
                date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
                company: company.to_string(),
                role: "Designer".to_string(),
                questions_answered: day as usize,
            });
        }
        document
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("interviews.json"));

        assert!(store.read().unwrap().is_none());
        assert_eq!(store.load(), StoreDocument::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested").join("interviews.json"));
        let document = sample_document();

        store.save(&document).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, document);
        let companies: Vec<_> = loaded.history.iter().map(|h| h.company.as_str()).collect();
        assert_eq!(companies, vec!["Google", "Meta", "Apple"]);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("interviews.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.read(), Err(PrepError::StoreCorrupt(_))));
        assert_eq!(store.load(), StoreDocument::default());
    }

    #[test]
    fn test_loads_document_with_non_uuid_session_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("interviews.json");
        std::fs::write(
            &path,
            r#"{
  "sessions": {
    "lq3k9x2abcd": {
      "id": "lq3k9x2abcd",
      "company": "Google",
      "role": "Designer",
      "questions": ["Tell me about yourself.", "Why Google?"],
      "currentIndex": 1,
      "answers": ["I design things."],
      "startedAt": "2024-05-01T09:30:00.000Z"
    }
  },
  "history": [
    { "date": "2024-04-30", "company": "Meta", "role": "Designer", "questionsAnswered": 5 }
  ]
}"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);

        let document = store.load();
        assert_eq!(document.sessions["lq3k9x2abcd"].current_index, 1);
        assert_eq!(document.history.len(), 1);

        // Saving must keep what was loaded
        store.save(&document).unwrap();
        let reloaded = store.load();
        assert!(reloaded.sessions.contains_key("lq3k9x2abcd"));
        assert_eq!(reloaded.history[0].company, "Meta");
        assert_eq!(reloaded.history[0].questions_answered, 5);
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("interviews.json"));

        store.save(&sample_document()).unwrap();
        store.save(&StoreDocument::default()).unwrap();

        assert_eq!(store.load(), StoreDocument::default());
        assert!(!temp_dir.path().join("interviews.json.tmp").exists());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();
        let document = sample_document();

        store.save(&document).unwrap();

        assert_eq!(observer.load(), document);
        assert_eq!(observer.save_count(), 1);
    }
}
