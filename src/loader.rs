use crate::errors::LoadError;
use crate::models::ShowRecord;
use std::time::Duration;
use tracing::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the show list from a dashboard's `/api/shows` endpoint.
#[derive(Debug, Clone)]
pub struct ShowsClient {
    base_url: String,
    client: reqwest::Client,
}

impl ShowsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn shows_url(&self) -> String {
        format!("{}/api/shows", self.base_url)
    }

    pub async fn fetch_shows(&self) -> Result<Vec<ShowRecord>, LoadError> {
        let url = self.shows_url();
        let resp = self.client.get(&url).send().await.map_err(|e| {
            warn!("request to {url} failed: {e}");
            LoadError::Transport(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{url} answered {status}");
            return Err(LoadError::from_status(status));
        }

        resp.json::<Vec<ShowRecord>>()
            .await
            .map_err(|e| LoadError::Parse(e.to_string()))
    }
}
