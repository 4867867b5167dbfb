//! Error type shared by the HTTP wrapper, data sources, and view state.
//!
//! ERROR HANDLING
//! ==============
//! Authorization failures are handled globally by `net::http` before this
//! value reaches a caller. Everything else is returned unmodified so the
//! initiating view can log it and show its own generic banner text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single analytics API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401; the token has already been cleared.
    #[error("authorization required")]
    Unauthorized,
    /// Any other non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No transport exists in this build (server rendering).
    #[error("HTTP transport not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error, pulling a readable message out of the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: error_message_from_body(body),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

const MAX_RAW_MESSAGE_CHARS: usize = 200;

/// Extract `detail`, `message`, or `error` from a JSON error body, falling
/// back to the (shortened) raw text.
fn error_message_from_body(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(text) = map.get(key).and_then(serde_json::Value::as_str) {
                return text.to_owned();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response".to_owned();
    }
    trimmed.chars().take(MAX_RAW_MESSAGE_CHARS).collect()
}
