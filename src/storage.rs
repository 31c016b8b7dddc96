use crate::models::ActivityRecord;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Reads the activity list once. Never fails: unreadable data means an empty
/// feed, and entries that don't decode are skipped.
pub async fn load_activities(path: &Path) -> Vec<ActivityRecord> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no activity file at {}", path.display());
            return Vec::new();
        }
        Err(err) => {
            error!("failed to read activity file: {err}");
            return Vec::new();
        }
    };

    let entries: Vec<Value> = match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(err) => {
            error!("failed to parse activity file: {err}");
            return Vec::new();
        }
    };

    decode_activities(entries)
}

pub fn decode_activities(entries: Vec<Value>) -> Vec<ActivityRecord> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("skipping activity #{index}: {err}");
                None
            }
        })
        .collect()
}
