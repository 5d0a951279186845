use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single search request
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl SearchError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let msg = if message.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::TOO_MANY_REQUESTS => SearchError::RateLimited(msg),
            status if status.is_server_error() => SearchError::ServerError(msg),
            status if status.is_client_error() => SearchError::BadRequest(msg),
            _ => SearchError::Unknown(msg),
        }
    }

    /// Worth another attempt after a backoff
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SearchError::NetworkError(_)
                | SearchError::Timeout(_)
                | SearchError::RateLimited(_)
                | SearchError::ServerError(_)
        )
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout(err.to_string())
        } else if err.is_decode() {
            SearchError::InvalidResponse(err.to_string())
        } else {
            SearchError::NetworkError(err.to_string())
        }
    }
}
