use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeterApiError {
    #[error("Failed to fetch: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    ErrorStatus { status: u16, message: Option<String> },

    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl MeterApiError {
    /// Error text the server attached to the reply, when there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            MeterApiError::ErrorStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
