use leetbat_core::model::Note;
use serde_json::Value;
use tracing::warn;

use crate::repository::SourceError;

/// Decode a notes response body.
///
/// The body must be a JSON array. Elements that are not objects are skipped
/// and logged; badly typed fields inside an object only lose that field.
/// The remaining notes keep their order.
///
/// # Errors
///
/// Returns `SourceError::Malformed` for invalid JSON and
/// `SourceError::NotAnArray` for any other top-level shape.
pub fn decode_notes(body: &str) -> Result<Vec<Note>, SourceError> {
    let Value::Array(items) = serde_json::from_str::<Value>(body)? else {
        return Err(SourceError::NotAnArray);
    };

    let mut notes = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Note>(item) {
            Ok(note) => notes.push(note),
            Err(err) => warn!(index, error = %err, "skipping unreadable note record"),
        }
    }
    Ok(notes)
}
