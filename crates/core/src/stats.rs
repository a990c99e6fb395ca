//! Aggregate statistics derived from the raw note list.
//!
//! Everything here is a pure function of the note slice. Filter and sort
//! selections never feed into these values.

use std::collections::HashSet;

use crate::model::{Difficulty, Note};

/// Distinct topics across all notes, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSet(Vec<String>);

impl TopicSet {
    /// Flatten every note's topics and keep the first occurrence of each.
    #[must_use]
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ordered = Vec::new();
        for topic in notes.iter().flat_map(Note::topics) {
            if seen.insert(topic.as_str()) {
                ordered.push(topic.clone());
            }
        }
        Self(ordered)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.0.iter().any(|t| t == topic)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Per-difficulty note counts. Unrecognised or missing difficulties count nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    #[must_use]
    pub fn from_notes(notes: &[Note]) -> Self {
        notes
            .iter()
            .filter_map(Note::difficulty)
            .fold(Self::default(), |mut counts, difficulty| {
                let slot = counts.slot_mut(difficulty);
                *slot = slot.saturating_add(1);
                counts
            })
    }

    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Output of the derivation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub topics: TopicSet,
    pub difficulty_counts: DifficultyCounts,
}

/// Derive the topic set and difficulty counts from the raw list.
#[must_use]
pub fn derive_stats(notes: &[Note]) -> NoteStats {
    NoteStats {
        topics: TopicSet::from_notes(notes),
        difficulty_counts: DifficultyCounts::from_notes(notes),
    }
}
