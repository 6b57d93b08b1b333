//! Error types for the labroster client.

use serde_json::Value;
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the backends.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status. `body` is the decoded JSON
    /// body, or the raw text as a JSON string when it was not JSON.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16, body: Value },

    /// Backend answered 2xx with a body we could not interpret.
    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    /// URL parse error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Domain validation error (course key, page number).
    #[error(transparent)]
    Domain(#[from] labroster_types::Error),
}

impl Error {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16, body: Value) -> Self {
        Self::Status {
            url: url.into(),
            status,
            body,
        }
    }

    /// Body of a non-success response, if this is one.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
