use crate::feed::UnknownFilter;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(err: &LoadError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Error loading shows: {err}"),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<UnknownFilter> for AppError {
    fn from(err: UnknownFilter) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        Self::bad_gateway(&err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Why a list could not be loaded. Reported to the reader, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid JSON: {0}")]
    Parse(String),
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl LoadError {
    pub fn from_status(status: StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_code() {
        let err = LoadError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn load_failure_maps_to_bad_gateway() {
        let err: AppError = LoadError::from_status(StatusCode::NOT_FOUND).into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, "Error loading shows: HTTP 404 Not Found");
    }

    #[test]
    fn unknown_filter_is_bad_request() {
        let err: AppError = UnknownFilter("ForkEvent".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("ForkEvent"));
    }
}
