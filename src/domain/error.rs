//! Error types for the category pipeline.

use thiserror::Error;

/// Outcome of one pass through the fetch/map pipeline.
///
/// The error arm carries the failure raised by the category source,
/// unchanged by the repository and use case layers.
pub type PipelineResult<T> = Result<T, FetchError>;

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connectivity, timeout or transport failure.
    Network,
    /// The response body does not have the expected shape.
    Serialization,
}

/// Errors that can occur while fetching the category list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read.
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The body is not a valid category list.
    #[error("Failed to parse category response: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Classify this error. Non-success statuses count as network failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network { .. } | FetchError::Status { .. } => ErrorKind::Network,
            FetchError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}
