use std::sync::Arc;

use leetbat_core::model::Note;
use source::NotesSource;
use tracing::{error, info};

use crate::dashboard::DashboardState;
use crate::error::{NotesServiceError, error_chain};

/// Result of the one-shot notes load, ready to publish into a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<Note>),
    Failed,
}

impl LoadOutcome {
    /// Apply the outcome to the latest snapshot.
    ///
    /// A failed load keeps whatever raw list the snapshot already had.
    #[must_use]
    pub fn apply(self, state: &DashboardState) -> DashboardState {
        match self {
            LoadOutcome::Loaded(notes) => state.with_notes(notes),
            LoadOutcome::Failed => state.with_load_failure(),
        }
    }
}

/// Data loader for the dashboard.
#[derive(Clone)]
pub struct NotesService {
    source: Arc<dyn NotesSource>,
}

impl NotesService {
    #[must_use]
    pub fn new(source: Arc<dyn NotesSource>) -> Self {
        Self { source }
    }

    /// Fetch the full note list from the source.
    ///
    /// # Errors
    ///
    /// Returns `NotesServiceError::Source` on transport, status, or body failures.
    pub async fn load_notes(&self) -> Result<Vec<Note>, NotesServiceError> {
        Ok(self.source.fetch_notes().await?)
    }

    /// Fetch once and log the result. Failures are swallowed here.
    pub async fn refresh(&self) -> LoadOutcome {
        match self.load_notes().await {
            Ok(notes) => {
                info!(count = notes.len(), "notes loaded");
                LoadOutcome::Loaded(notes)
            }
            Err(err) => {
                error!(error = %error_chain(&err), "failed to load notes");
                LoadOutcome::Failed
            }
        }
    }
}
