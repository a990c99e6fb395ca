//! Filter and sort stage: projects the raw list into the display list.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;
use crate::model::{Difficulty, Note};

//
// ─── SORT ORDER ───────────────────────────────────────────────────────────────
//

/// Sort selection as exposed by the sort control.
///
/// The labels are inverted relative to the resulting order: `Desc`
/// ("Newest First") lists the oldest note first and `Asc` ("Oldest First")
/// lists the newest note first. Existing users rely on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Desc, SortOrder::Asc];

    /// Control value (`"desc"` / `"asc"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Desc => "Newest First",
            SortOrder::Asc => "Oldest First",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" => Ok(SortOrder::Desc),
            "asc" => Ok(SortOrder::Asc),
            other => Err(SelectionError::UnknownSortOrder(other.to_owned())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── SELECTION ────────────────────────────────────────────────────────────────
//

/// Current filter and sort selections. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub sort: SortOrder,
}

impl Selection {
    /// Parse a topic control value; the empty string selects all topics.
    #[must_use]
    pub fn topic_from_value(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_owned())
    }

    /// Parse a difficulty control value; the empty string selects all difficulties.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownDifficulty` for any other unrecognised value.
    pub fn difficulty_from_value(value: &str) -> Result<Option<Difficulty>, SelectionError> {
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }

    /// True when the note passes both the topic and the difficulty filter.
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        let topic_ok = self.topic.as_deref().is_none_or(|topic| note.has_topic(topic));
        let difficulty_ok = self
            .difficulty
            .is_none_or(|difficulty| note.difficulty() == Some(difficulty));
        topic_ok && difficulty_ok
    }
}

/// Filter and sort the raw list for display.
///
/// Notes are ordered by parsed timestamp. Missing or unparseable timestamps
/// are older than every valid one. Equal keys keep their input order.
#[must_use]
pub fn derive_display_list(notes: &[Note], selection: &Selection) -> Vec<Note> {
    let mut display: Vec<Note> = notes
        .iter()
        .filter(|note| selection.matches(note))
        .cloned()
        .collect();

    match selection.sort {
        SortOrder::Desc => display.sort_by_cached_key(Note::timestamp),
        SortOrder::Asc => display.sort_by_cached_key(|note| Reverse(note.timestamp())),
    }

    display
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::time::fixed_now;

    fn at(id: &str, offset_days: i64) -> Note {
        Note::new(id, format!("Question {id}"))
            .with_timestamp(fixed_now() + Duration::days(offset_days))
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id().as_str()).collect()
    }

    fn sample() -> Vec<Note> {
        vec![
            at("a", 2).with_topics(["Arrays"]).with_difficulty("Easy"),
            at("b", 0).with_topics(["Arrays", "DP"]).with_difficulty("Hard"),
            at("c", 1).with_topics(["Graph"]).with_difficulty("Easy"),
            at("d", 3).with_topics(["DP"]).with_difficulty("N/A"),
        ]
    }

    #[test]
    fn default_desc_lists_oldest_first() {
        let display = derive_display_list(&sample(), &Selection::default());
        assert_eq!(ids(&display), ["b", "c", "a", "d"]);
    }

    #[test]
    fn asc_lists_newest_first() {
        let selection = Selection {
            sort: SortOrder::Asc,
            ..Selection::default()
        };
        let display = derive_display_list(&sample(), &selection);
        assert_eq!(ids(&display), ["d", "a", "c", "b"]);
    }

    #[test]
    fn topic_filter_is_exact_membership() {
        let notes = vec![
            Note::new("1", "q1").with_topics(["Arrays"]),
            Note::new("2", "q2").with_topics(["Arrays", "DP"]),
        ];
        let selection = Selection {
            topic: Some("DP".into()),
            ..Selection::default()
        };
        assert_eq!(ids(&derive_display_list(&notes, &selection)), ["2"]);

        let selection = Selection {
            topic: Some("dp".into()),
            ..Selection::default()
        };
        assert!(derive_display_list(&notes, &selection).is_empty());
    }

    #[test]
    fn filters_compose_conjunctively_and_are_exact() {
        let notes = sample();
        for topic in [None, Some("Arrays"), Some("DP"), Some("Graph"), Some("Missing")] {
            for difficulty in [None, Some(Difficulty::Easy), Some(Difficulty::Medium), Some(Difficulty::Hard)] {
                let selection = Selection {
                    topic: topic.map(str::to_owned),
                    difficulty,
                    sort: SortOrder::Desc,
                };
                let display = derive_display_list(&notes, &selection);

                for note in &display {
                    assert!(topic.is_none_or(|t| note.has_topic(t)));
                    assert!(difficulty.is_none_or(|d| note.difficulty_label() == Some(d.as_str())));
                }
                let expected = notes.iter().filter(|n| selection.matches(n)).count();
                assert_eq!(display.len(), expected);
            }
        }
    }

    #[test]
    fn difficulty_filter_keeps_only_exact_label() {
        let selection = Selection {
            difficulty: Some(Difficulty::Easy),
            ..Selection::default()
        };
        let display = derive_display_list(&sample(), &selection);
        assert_eq!(ids(&display), ["c", "a"]);
    }

    #[test]
    fn invalid_timestamps_sort_before_valid_ones_under_desc() {
        let notes = vec![
            at("valid", 0),
            Note::new("garbage", "q").with_timestamp("not a date"),
            Note::new("missing", "q"),
        ];
        let display = derive_display_list(&notes, &Selection::default());
        assert_eq!(ids(&display), ["garbage", "missing", "valid"]);

        let selection = Selection {
            sort: SortOrder::Asc,
            ..Selection::default()
        };
        let display = derive_display_list(&notes, &selection);
        assert_eq!(ids(&display), ["valid", "garbage", "missing"]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let notes = vec![at("x", 1), at("y", 0), at("z", 1), at("w", 0)];
        let display = derive_display_list(&notes, &Selection::default());
        assert_eq!(ids(&display), ["y", "w", "x", "z"]);

        let selection = Selection {
            sort: SortOrder::Asc,
            ..Selection::default()
        };
        let display = derive_display_list(&notes, &selection);
        assert_eq!(ids(&display), ["x", "z", "y", "w"]);
    }

    #[test]
    fn ordering_property_holds_for_valid_timestamps() {
        let notes = sample();
        let display = derive_display_list(&notes, &Selection::default());
        for pair in display.windows(2) {
            assert!(pair[0].timestamp() <= pair[1].timestamp());
        }

        let selection = Selection {
            sort: SortOrder::Asc,
            ..Selection::default()
        };
        let display = derive_display_list(&notes, &selection);
        for pair in display.windows(2) {
            assert!(pair[0].timestamp() >= pair[1].timestamp());
        }
    }

    #[test]
    fn same_inputs_give_same_output() {
        let notes = sample();
        let selection = Selection {
            topic: Some("Arrays".into()),
            difficulty: None,
            sort: SortOrder::Asc,
        };
        let first = derive_display_list(&notes, &selection);
        let second = derive_display_list(&notes, &selection);
        assert_eq!(first, second);
        assert_eq!(notes, sample());
    }

    #[test]
    fn empty_list_yields_empty_display() {
        assert!(derive_display_list(&[], &Selection::default()).is_empty());
    }

    #[test]
    fn parses_control_values() {
        assert_eq!(Selection::topic_from_value(""), None);
        assert_eq!(Selection::topic_from_value("DP"), Some("DP".to_string()));
        assert_eq!(Selection::difficulty_from_value(""), Ok(None));
        assert_eq!(
            Selection::difficulty_from_value("Medium"),
            Ok(Some(Difficulty::Medium))
        );
        assert!(Selection::difficulty_from_value("medium").is_err());
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!(
            "newest".parse::<SortOrder>(),
            Err(SelectionError::UnknownSortOrder("newest".into()))
        );
        assert_eq!(SortOrder::Desc.label(), "Newest First");
    }
}
