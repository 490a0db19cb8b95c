/*
[INPUT]:  Error sources (config, encoding, transport, remote status, decoding)
[OUTPUT]: Structured error type shared by every operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the River Platform client
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Required configuration is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body could not be encoded
    #[error("Request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Request URL could not be built
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Caller-supplied id cannot be used as a path segment
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Network, TLS or timeout failure reported by the HTTP client
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client's cancellation token fired
    #[error("context canceled")]
    Cancelled,

    /// The client's deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// Server answered with a failure status
    #[error("Error {status}: {reason}")]
    Remote { status: u16, reason: String },

    /// Server answered with a success status but the body did not match the
    /// expected shape
    #[error("Response decoding failed: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl PlatformError {
    /// Create a remote error from status code and reason
    pub fn remote(status: u16, reason: impl Into<String>) -> Self {
        PlatformError::Remote {
            status,
            reason: reason.into(),
        }
    }

    /// HTTP status of a remote error
    pub fn status(&self) -> Option<u16> {
        match self {
            PlatformError::Remote { status, .. } => Some(*status),
            PlatformError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, PlatformError::Remote { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, PlatformError::Decode { .. })
    }

    /// Check if the call was abandoned through the client's context
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            PlatformError::Cancelled | PlatformError::DeadlineExceeded
        )
    }

    /// Check if the error was raised before any request was sent
    pub fn is_request_construction(&self) -> bool {
        matches!(
            self,
            PlatformError::Encode(_)
                | PlatformError::UrlParse(_)
                | PlatformError::InvalidPathSegment(_)
        )
    }
}

/// Result type alias for River Platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
