//! Error types for the Actions API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the Actions API
///
/// Every variant carries the request path (relative to the repository's
/// `actions/` base) so failures can be traced to the call that produced them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be read
    #[error("HTTP request to '{path}' failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// API returned an error status code
    #[error("API error on '{path}' (status {status}): {message}")]
    Api {
        path: String,
        /// HTTP status code
        status: u16,
        /// Response body returned by the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response from '{path}': {message}")]
    Parse { path: String, message: String },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(path: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            path: path.into(),
            status,
            message: message.into(),
        }
    }

    /// Request path the error originated from
    pub fn path(&self) -> &str {
        match self {
            Self::Request { path, .. } | Self::Api { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// HTTP status code, if the API answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
