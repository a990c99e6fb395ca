//! Shared error types for the services crate.

use std::error::Error as StdError;

use thiserror::Error;

use source::SourceError;

/// Errors emitted by `NotesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotesServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors emitted while resolving the notes source configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid notes url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("notes url {raw:?} must use http or https, not {scheme:?}")]
    UnsupportedScheme { raw: String, scheme: String },
}

/// Render an error and every `source()` beneath it as `outer: inner: ...`.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        rendered.push_str(": ");
        rendered.push_str(&inner.to_string());
        cause = inner.source();
    }
    rendered
}
