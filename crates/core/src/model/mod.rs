mod difficulty;
mod ids;
mod note;

pub use difficulty::Difficulty;
pub use ids::NoteId;
pub use note::{Note, NoteTimestamp, QuestionNumber};
