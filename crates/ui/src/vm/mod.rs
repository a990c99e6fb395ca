mod filter_vm;
mod note_vm;
mod stats_vm;
mod time_fmt;

pub use filter_vm::{
    SelectOptionVm, difficulty_options, difficulty_value, sort_options, topic_options,
    topic_value,
};
pub use note_vm::{BadgeTone, DifficultyBadgeVm, NoteRowVm, map_note_rows};
pub use stats_vm::{StatCounterVm, map_stat_counters};
pub use time_fmt::{format_local_timestamp, format_timestamp_in};
