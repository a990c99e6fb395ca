use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::model::{Difficulty, NoteId};
use crate::time::{parse_epoch_millis, parse_timestamp};

//
// ─── QUESTION NUMBER ──────────────────────────────────────────────────────────
//

/// Question number as sent by the source: either a JSON number or a string.
///
/// Rendered as-is; never used for ordering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuestionNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionNumber::Integer(n) => write!(f, "{n}"),
            QuestionNumber::Float(n) => write!(f, "{n}"),
            QuestionNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for QuestionNumber {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for QuestionNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

//
// ─── TIMESTAMP ────────────────────────────────────────────────────────────────
//

/// Raw timestamp as sent by the source.
///
/// Strings are parsed lazily; epoch values are interpreted as milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NoteTimestamp {
    EpochMillis(f64),
    Text(String),
}

impl NoteTimestamp {
    /// Parse into a UTC instant. `None` means the value is not a valid date.
    #[must_use]
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        match self {
            NoteTimestamp::EpochMillis(ms) => parse_epoch_millis(*ms),
            NoteTimestamp::Text(raw) => parse_timestamp(raw),
        }
    }
}

impl From<&str> for NoteTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<DateTime<Utc>> for NoteTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Text(value.to_rfc3339())
    }
}

//
// ─── NOTE ─────────────────────────────────────────────────────────────────────
//

/// One study note as returned by the remote notes source.
///
/// Every wire field is optional and read on its own. Missing, `null` or
/// wrongly typed values degrade to empty strings / empty topic lists /
/// absent values instead of failing the record. Non-string topics are
/// dropped from the topic list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Note {
    #[serde(rename = "_id", default, deserialize_with = "lenient_or_default")]
    id: NoteId,
    #[serde(rename = "questionName", default, deserialize_with = "lenient_or_default")]
    question_name: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    note: String,
    #[serde(rename = "questionTopics", default, deserialize_with = "lenient_topics")]
    question_topics: Vec<String>,
    #[serde(rename = "questionNumber", default, deserialize_with = "lenient_option")]
    question_number: Option<QuestionNumber>,
    #[serde(default, deserialize_with = "lenient_option")]
    difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    timestamp: Option<NoteTimestamp>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    url: String,
}

/// A wire value that is either a `T` or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.into_option())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(lenient_option(deserializer)?.unwrap_or_default())
}

fn lenient_topics<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let topics: Vec<Lenient<String>> = lenient_or_default(deserializer)?;
    Ok(topics.into_iter().filter_map(Lenient::into_option).collect())
}

impl Note {
    #[must_use]
    pub fn new(id: impl Into<NoteId>, question_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question_name: question_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    #[must_use]
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.question_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_question_number(mut self, number: impl Into<QuestionNumber>) -> Self {
        self.question_number = Some(number.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<NoteTimestamp>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    #[must_use]
    pub fn question_name(&self) -> &str {
        &self.question_name
    }

    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.question_topics
    }

    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.question_topics.iter().any(|t| t == topic)
    }

    #[must_use]
    pub fn question_number(&self) -> Option<&QuestionNumber> {
        self.question_number.as_ref()
    }

    /// The raw difficulty string, if present and non-empty.
    #[must_use]
    pub fn difficulty_label(&self) -> Option<&str> {
        self.difficulty.as_deref().filter(|d| !d.is_empty())
    }

    /// The difficulty, if the raw label is exactly one of the known values.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().and_then(Difficulty::from_label)
    }

    /// Parsed timestamp; `None` when absent or unparseable.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp.as_ref().and_then(NoteTimestamp::parse)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
