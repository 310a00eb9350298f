//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// Every failure from a dispatched call lands in exactly one of `Transport`,
/// `Api` or `Decode`. The remaining variants are raised before any network
/// I/O happens.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout, broken body stream).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API request failed: {status} {status_text}\n{body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Reason phrase for the status code.
        status_text: String,
        /// Raw response body, verbatim.
        body: String,
    },

    /// A success response body could not be parsed into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request path carried a query string or fragment of its own.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
