use reqwest::StatusCode;
use sibyl_core::error::SibylError;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl From<GeminiError> for SibylError {
    fn from(value: GeminiError) -> Self {
        SibylError::Backend(Box::new(value))
    }
}
