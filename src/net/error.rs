//! Failure taxonomy for backend API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by [`super::client::ApiClient::execute`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The path template names a parameter the params value does not supply.
    #[error("missing path parameter: {0}")]
    MissingPathParam(String),

    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the operation's response type.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only performed in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Human-readable message, when the failure carries one.
    ///
    /// Bare status failures and server-side stubs have none, so callers fall
    /// back to an operation-specific sentence.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let text = match self {
            Self::Status { message, .. } => message.clone()?,
            Self::Unavailable => return None,
            Self::Transport(text) => text.clone(),
            other => other.to_string(),
        };
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}

/// Collapse an optional failure into the string shown by the UI.
///
/// `None` stays `None`; a failure yields its own message or `fallback`.
#[must_use]
pub fn normalize_error(error: Option<&ApiError>, fallback: &str) -> Option<String> {
    error.map(|e| e.message().unwrap_or_else(|| fallback.to_owned()))
}

/// Extract a message from a JSON error body (`{"message": ..}` or `{"error": ..}`).
#[must_use]
pub fn error_body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_owned)
}
