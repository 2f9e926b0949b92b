//! # Error Types
//!
//! Validation errors for the identifier newtypes, and the coarse
//! [`ErrorKind`] classification that every registry failure is reduced to
//! before it is reported to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a domain identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Country code is not two ASCII letters.
    #[error("invalid country code: \"{0}\" (expected two ASCII letters)")]
    InvalidCountryCode(String),

    /// Product code is empty after trimming.
    #[error("product code must not be empty")]
    EmptyProductCode,

    /// Product code contains whitespace or openFDA search syntax.
    #[error("product code {0:?} contains whitespace or search syntax characters")]
    MalformedProductCode(String),

    /// Labeler name is empty after trimming.
    #[error("labeler name must not be empty")]
    EmptyLabelerName,
}

/// Classification of a failed registry query.
///
/// A query that fails for any of these reasons yields an empty result and a
/// user-visible notice; none of them abort the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Connection failure, timeout, or a non-2xx status other than 404.
    Transport,
    /// The response body could not be decoded.
    Decode,
    /// The registry reported no records for the search.
    NotFound,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Decode => write!(f, "decode"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
