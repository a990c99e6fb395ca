#![forbid(unsafe_code)]

pub mod decode;
pub mod http;
pub mod repository;

pub use decode::decode_notes;
pub use http::HttpNotesSource;
pub use repository::{InMemoryNotesSource, NotesSource, SourceError};
