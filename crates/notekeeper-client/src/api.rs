//! Transport to the notes HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use notekeeper_core::defaults::CLIENT_TIMEOUT_SECS;
use notekeeper_core::{NewNote, Note};
use reqwest::{Response, Url};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Operations the note manager needs from the server.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list_notes(&self) -> ClientResult<Vec<Note>>;

    async fn create_note(&self, note: &NewNote) -> ClientResult<Note>;

    /// Returns the server's confirmation message.
    async fn delete_note(&self, id: &str) -> ClientResult<String>;
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`NotesApi`] over HTTP using reqwest.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpNotesApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> ClientResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// `{base}/api/notes[/{id}]`, with the id percent-encoded as one segment.
    fn notes_url(&self, id: Option<&str>) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().extend(["api", "notes"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

/// Turn a non-2xx response into [`ClientError::Status`].
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list_notes(&self) -> ClientResult<Vec<Note>> {
        let response = self.client.get(self.notes_url(None)?).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create_note(&self, note: &NewNote) -> ClientResult<Note> {
        let response = self
            .client
            .post(self.notes_url(None)?)
            .json(note)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete_note(&self, id: &str) -> ClientResult<String> {
        let response = self.client.delete(self.notes_url(Some(id))?).send().await?;
        let body: MessageBody = check(response).await?.json().await?;
        Ok(body.message)
    }
}
