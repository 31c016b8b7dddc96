use crate::errors::LoadError;
use crate::loader::ShowsClient;
use crate::models::ShowRecord;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where the dashboard gets its shows from.
#[derive(Debug, Clone)]
pub enum ShowSource {
    File(PathBuf),
    Remote(ShowsClient),
}

impl ShowSource {
    /// Loads the list, most recently watched first.
    pub async fn load(&self) -> Result<Vec<ShowRecord>, LoadError> {
        let mut shows = match self {
            ShowSource::File(path) => read_shows_file(path).await?,
            ShowSource::Remote(client) => client.fetch_shows().await?,
        };
        sort_by_last_watched(&mut shows);
        Ok(shows)
    }
}

async fn read_shows_file(path: &Path) -> Result<Vec<ShowRecord>, LoadError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse(e.to_string())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(LoadError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }),
    }
}

/// Newest first; shows never watched go last, keeping their relative order.
pub fn sort_by_last_watched(shows: &mut [ShowRecord]) {
    shows.sort_by(|a, b| b.last_watched_at.cmp(&a.last_watched_at));
}
