//! openFDA client error types.

use fdareg_core::ErrorKind;

/// Errors from openFDA calls.
#[derive(Debug, thiserror::Error)]
pub enum OpenFdaError {
    /// HTTP transport error, including a body that could not be read.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// openFDA returned a non-2xx status other than 404.
    #[error("openFDA {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// openFDA reported that the search matched nothing (HTTP 404).
    #[error("openFDA {endpoint} found no matching records")]
    NotFound { endpoint: String },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
}

impl OpenFdaError {
    /// Coarse classification used when reporting the failure to the user.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::ApiError { .. } => ErrorKind::Transport,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Deserialization { .. } => ErrorKind::Decode,
        }
    }

    /// The endpoint label the failing call was made against.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Http { endpoint, .. }
            | Self::ApiError { endpoint, .. }
            | Self::NotFound { endpoint }
            | Self::Deserialization { endpoint, .. } => endpoint,
        }
    }
}
