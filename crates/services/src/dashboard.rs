//! Immutable dashboard state container.
//!
//! Every update returns a new `DashboardState`; the raw list is shared
//! between snapshots and never mutated. Stats are derived only when the raw
//! list changes, the display list is derived on demand from the snapshot.

use std::sync::Arc;

use leetbat_core::model::{Difficulty, Note};
use leetbat_core::{NoteStats, Selection, SortOrder, derive_display_list, derive_stats};

/// Where the one-shot load stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    notes: Arc<[Note]>,
    stats: NoteStats,
    selection: Selection,
    status: LoadStatus,
}

impl DashboardState {
    /// Publish a new raw list and re-derive the stats. Selections are kept.
    #[must_use]
    pub fn with_notes(&self, notes: Vec<Note>) -> Self {
        let stats = derive_stats(&notes);
        Self {
            notes: notes.into(),
            stats,
            selection: self.selection.clone(),
            status: LoadStatus::Loaded,
        }
    }

    /// Record a failed load. The previous raw list and stats are kept.
    #[must_use]
    pub fn with_load_failure(&self) -> Self {
        Self {
            status: LoadStatus::Failed,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_topic(&self, topic: Option<String>) -> Self {
        self.with_selection(Selection {
            topic,
            ..self.selection.clone()
        })
    }

    #[must_use]
    pub fn with_difficulty(&self, difficulty: Option<Difficulty>) -> Self {
        self.with_selection(Selection {
            difficulty,
            ..self.selection.clone()
        })
    }

    #[must_use]
    pub fn with_sort(&self, sort: SortOrder) -> Self {
        self.with_selection(Selection {
            sort,
            ..self.selection.clone()
        })
    }

    #[must_use]
    pub fn with_selection(&self, selection: Selection) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn stats(&self) -> &NoteStats {
        &self.stats
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Filtered and sorted projection of the raw list for the current selection.
    #[must_use]
    pub fn display_list(&self) -> Vec<Note> {
        derive_display_list(&self.notes, &self.selection)
    }
}
