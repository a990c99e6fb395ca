use std::env;

use url::Url;

use crate::error::ConfigError;

/// Endpoint serving the study notes.
pub const DEFAULT_NOTES_URL: &str = "https://leetbat-server.onrender.com/api/notes";

/// Environment variable overriding `DEFAULT_NOTES_URL`.
pub const NOTES_URL_ENV: &str = "LEETBAT_NOTES_URL";

/// Where the dashboard loads its notes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesSourceConfig {
    notes_url: String,
}

impl Default for NotesSourceConfig {
    fn default() -> Self {
        Self {
            notes_url: DEFAULT_NOTES_URL.to_owned(),
        }
    }
}

impl NotesSourceConfig {
    /// Validate an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the value is not an absolute http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            raw: raw.to_owned(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                raw: raw.to_owned(),
                scheme: parsed.scheme().to_owned(),
            });
        }
        Ok(Self {
            notes_url: trimmed.to_owned(),
        })
    }

    /// Read `LEETBAT_NOTES_URL`, falling back to the built-in endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the variable is set to an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_override(env::var(NOTES_URL_ENV).ok())
    }

    /// Resolve an optional override; blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a non-blank override is not a valid URL.
    pub fn from_override(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn notes_url(&self) -> &str {
        &self.notes_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_builtin_endpoint() {
        assert_eq!(NotesSourceConfig::default().notes_url(), DEFAULT_NOTES_URL);
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = NotesSourceConfig::from_override(Some("   ".into())).unwrap();
        assert_eq!(config.notes_url(), DEFAULT_NOTES_URL);
        let config = NotesSourceConfig::from_override(None).unwrap();
        assert_eq!(config.notes_url(), DEFAULT_NOTES_URL);
    }

    #[test]
    fn override_is_trimmed_and_validated() {
        let config =
            NotesSourceConfig::from_override(Some(" http://localhost:4000/api/notes ".into()))
                .unwrap();
        assert_eq!(config.notes_url(), "http://localhost:4000/api/notes");
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            NotesSourceConfig::new("/api/notes"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            NotesSourceConfig::new("ftp://example.com/notes"),
            Err(ConfigError::UnsupportedScheme { ref scheme, .. }) if scheme == "ftp"
        ));
    }
}
