use std::sync::Arc;

use services::NotesService;

pub trait UiApp: Send + Sync {
    fn notes_service(&self) -> Arc<NotesService>;
}

#[derive(Clone)]
pub struct AppContext {
    notes: Arc<NotesService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            notes: app.notes_service(),
        }
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
