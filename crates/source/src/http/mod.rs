use async_trait::async_trait;
use leetbat_core::model::Note;
use reqwest::Client;
use tracing::debug;

use crate::decode::decode_notes;
use crate::repository::{NotesSource, SourceError};

/// Notes source backed by a single HTTP GET endpoint.
///
/// No query parameters, custom headers, timeouts or retries are applied.
#[derive(Clone)]
pub struct HttpNotesSource {
    client: Client,
    url: String,
}

impl HttpNotesSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl NotesSource for HttpNotesSource {
    async fn fetch_notes(&self) -> Result<Vec<Note>, SourceError> {
        debug!(url = %self.url, "requesting notes");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        decode_notes(&body)
    }
}
