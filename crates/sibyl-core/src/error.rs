//! Unified error type exposed by **`sibyl-core`**.
//!
//! Backend crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`SibylClient`]. This keeps the
//! public API small while still conveying rich diagnostic information.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SibylError>;

#[derive(Debug, Error)]
pub enum SibylError {
    /// No usable API credential: neither an explicit key nor the designated
    /// environment variable yielded a non-empty value. Always raised before
    /// any network activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A schema description used a kind name outside the vocabulary the
    /// backend's schema representation understands. Raised during
    /// translation, before any network activity.
    #[error("unsupported schema type: {0}")]
    UnsupportedSchemaType(String),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the LLM provider. Also covers a structured-mode reply
    /// that does not parse as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn't fit
    /// another category. Transport, authentication and server failures from
    /// the underlying call land here unchanged.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
