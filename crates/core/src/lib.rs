#![forbid(unsafe_code)]

pub mod display;
pub mod error;
pub mod model;
pub mod stats;
pub mod time;

pub use display::{Selection, SortOrder, derive_display_list};
pub use error::SelectionError;
pub use stats::{DifficultyCounts, NoteStats, TopicSet, derive_stats};
