use reqwest::StatusCode;
use serde::Deserialize;

/// Normalized gateway failure. Callers only ever see the `Display`
/// message; they never branch on raw transport error shapes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Structured error reported by the backend in its response body
    #[error("{0}")]
    Backend(String),

    /// Transport-level failure (connect, timeout, malformed body, error
    /// status without a structured body)
    #[error("{0}")]
    Transport(String),

    #[error("Unknown error")]
    Unknown,
}

/// Shape of the backend's JSON error body.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Extraction precedence: the body's `error` field if present, then a
    /// status-based transport message, then the literal fallback.
    pub(crate) fn from_error_response(status: StatusCode, body: &[u8]) -> Self {
        if let Ok(ErrorBody { error: Some(message) }) = serde_json::from_slice(body) {
            return ApiError::Backend(message);
        }
        ApiError::Transport(format!("request failed with status {status}"))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            ApiError::Unknown
        } else {
            ApiError::Transport(message)
        }
    }
}
