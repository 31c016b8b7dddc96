use crate::display::DisplayConfig;
use crate::models::ActivityRecord;
use crate::shows::ShowSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<[ActivityRecord]>,
    pub shows: ShowSource,
    pub display: DisplayConfig,
}

impl AppState {
    pub fn new(activities: Vec<ActivityRecord>, shows: ShowSource, display: DisplayConfig) -> Self {
        Self {
            activities: activities.into(),
            shows,
            display,
        }
    }
}
