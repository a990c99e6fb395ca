use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use leetbat_core::model::Note;
use thiserror::Error;

/// Errors surfaced by notes source adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("notes request failed")]
    Http(#[from] reqwest::Error),

    #[error("notes request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("notes body is not valid JSON")]
    Malformed(#[from] serde_json::Error),

    #[error("notes body is not a JSON array")]
    NotAnArray,

    #[error("notes source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only contract for wherever the raw note list comes from.
#[async_trait]
pub trait NotesSource: Send + Sync {
    /// Fetch the full note list.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` on transport failures, non-success responses,
    /// or bodies that are not a JSON array.
    async fn fetch_notes(&self) -> Result<Vec<Note>, SourceError>;
}

/// Fixed in-memory source for tests and offline runs.
///
/// Clones share the fetch counter.
#[derive(Clone, Default)]
pub struct InMemoryNotesSource {
    notes: Vec<Note>,
    failure: Option<String>,
    fetches: Arc<AtomicUsize>,
}

impl InMemoryNotesSource {
    #[must_use]
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// A source whose every fetch fails with `SourceError::Unavailable`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of `fetch_notes` calls served so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Acquire)
    }
}

#[async_trait]
impl NotesSource for InMemoryNotesSource {
    async fn fetch_notes(&self) -> Result<Vec<Note>, SourceError> {
        self.fetches.fetch_add(1, Ordering::AcqRel);
        match &self.failure {
            Some(message) => Err(SourceError::Unavailable(message.clone())),
            None => Ok(self.notes.clone()),
        }
    }
}
