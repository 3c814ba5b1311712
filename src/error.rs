//! Error types for the R/a/dio client

/// Result type alias for R/a/dio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the R/a/dio client
///
/// A failed refresh is terminal for that cycle only: it never poisons a
/// previously fetched snapshot and the next refresh starts clean.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (connection, DNS, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API returned error status: {0}")]
    Api(reqwest::StatusCode),

    /// Response body was empty
    #[error("empty response body")]
    EmptyBody,

    /// Response body was not valid UTF-8
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON parsing failed (malformed document, missing or mistyped field)
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this is a transport-level failure (fetch stage)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api(_))
    }

    /// Whether this is a malformed-response failure (parse stage)
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Json(_) | Self::EmptyBody | Self::Utf8(_))
    }
}
