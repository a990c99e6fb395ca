use thiserror::Error;

/// Errors raised while parsing select-control values into a `Selection`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("unknown difficulty value: {0:?}")]
    UnknownDifficulty(String),
    #[error("unknown sort order value: {0:?}")]
    UnknownSortOrder(String),
}
