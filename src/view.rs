use crate::errors::LoadError;

/// What a list view shows: the items, a "no content" message, or a failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState<T> {
    Ready(Vec<T>),
    Empty,
    LoadFailure(String),
}

impl<T> DisplayState<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Ready(records)
        }
    }

    pub fn from_load(result: Result<Vec<T>, LoadError>) -> Self {
        match result {
            Ok(records) => Self::from_records(records),
            Err(err) => DisplayState::LoadFailure(err.to_string()),
        }
    }
}
