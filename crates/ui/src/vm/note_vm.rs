use leetbat_core::model::{Difficulty, Note};

use crate::vm::time_fmt::format_local_timestamp;

/// Style token for a difficulty badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Easy,
    Medium,
    Hard,
    Neutral,
}

impl BadgeTone {
    /// Total mapping; anything outside the closed set is `Neutral`.
    #[must_use]
    pub fn for_difficulty(difficulty: Option<Difficulty>) -> Self {
        match difficulty {
            Some(Difficulty::Easy) => BadgeTone::Easy,
            Some(Difficulty::Medium) => BadgeTone::Medium,
            Some(Difficulty::Hard) => BadgeTone::Hard,
            None => BadgeTone::Neutral,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Easy => "badge badge--easy",
            BadgeTone::Medium => "badge badge--medium",
            BadgeTone::Hard => "badge badge--hard",
            BadgeTone::Neutral => "badge badge--neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyBadgeVm {
    pub text: String,
    pub tone: BadgeTone,
}

impl DifficultyBadgeVm {
    /// Absent or empty difficulties read "N/A"; anything else keeps its literal text.
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            text: note.difficulty_label().unwrap_or("N/A").to_owned(),
            tone: BadgeTone::for_difficulty(note.difficulty()),
        }
    }
}

/// UI-ready table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteRowVm {
    pub key: String,
    pub number: usize,
    pub question_name: String,
    pub note: String,
    pub topics: Vec<String>,
    pub question_number: String,
    pub difficulty: DifficultyBadgeVm,
    pub timestamp_str: String,
    pub url: String,
}

impl NoteRowVm {
    #[must_use]
    pub fn new(index: usize, note: &Note) -> Self {
        let number = index + 1;
        Self {
            key: format!("{}:{number}", note.id()),
            number,
            question_name: note.question_name().to_owned(),
            note: note.note().to_owned(),
            topics: note.topics().to_vec(),
            question_number: note
                .question_number()
                .map(ToString::to_string)
                .unwrap_or_default(),
            difficulty: DifficultyBadgeVm::from_note(note),
            timestamp_str: format_local_timestamp(note.timestamp()),
            url: note.url().to_owned(),
        }
    }
}

/// Map the display list into numbered table rows.
#[must_use]
pub fn map_note_rows(notes: &[Note]) -> Vec<NoteRowVm> {
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| NoteRowVm::new(index, note))
        .collect()
}
