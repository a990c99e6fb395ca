#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod notes_service;

pub use app_services::AppServices;
pub use config::{DEFAULT_NOTES_URL, NOTES_URL_ENV, NotesSourceConfig};
pub use dashboard::{DashboardState, LoadStatus};
pub use error::{ConfigError, NotesServiceError};
pub use notes_service::{LoadOutcome, NotesService};
