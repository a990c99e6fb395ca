use std::sync::Arc;

use source::{HttpNotesSource, NotesSource};

use crate::config::NotesSourceConfig;
use crate::notes_service::NotesService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    notes: Arc<NotesService>,
}

impl AppServices {
    /// Build services backed by the HTTP notes endpoint.
    #[must_use]
    pub fn from_config(config: &NotesSourceConfig) -> Self {
        let source: Arc<dyn NotesSource> = Arc::new(HttpNotesSource::new(config.notes_url()));
        Self::with_source(source)
    }

    /// Build services over any notes source.
    #[must_use]
    pub fn with_source(source: Arc<dyn NotesSource>) -> Self {
        Self {
            notes: Arc::new(NotesService::new(source)),
        }
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes)
    }
}
