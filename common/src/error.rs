//! Error type definitions

use thiserror::Error;

/// Shared error type
///
/// Every variant is terminal for the current analysis attempt; nothing
/// in this crate retries automatically.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("GEMINI_API_KEY is not set in environment variables.")]
    MissingCredential,

    #[error("upstream request failed with status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
