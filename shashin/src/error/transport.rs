use thiserror::Error;

/// Failure below the HTTP layer: the request never produced a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid request url: {0}")]
    InvalidUrl(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}
