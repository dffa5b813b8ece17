use std::time::Duration;

/// Errors that can occur while delivering a request to a node.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The target could not be turned into an endpoint.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// The node could not be reached.
    #[error("{target} unreachable: {reason}")]
    Unreachable { target: String, reason: String },

    /// The node rejected the credentials.
    #[error("authentication rejected by {target} (HTTP {status})")]
    Unauthorized { target: String, status: u16 },

    /// The request did not complete in time.
    #[error("request to {target} timed out after {timeout:?}")]
    Timeout { target: String, timeout: Duration },

    /// An I/O error occurred on the transport.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other HTTP client failure.
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
