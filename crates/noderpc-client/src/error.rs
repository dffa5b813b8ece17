use noderpc_message::{MessageError, RpcError};
use noderpc_transport::TransportError;

/// Errors that can occur in client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Request validation, encoding, reply reading or decoding failed.
    #[error("message error: {0}")]
    Message(#[from] MessageError),

    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The node answered with an error envelope.
    #[error("{0}")]
    Rpc(#[from] RpcError),

    /// The reply does not belong to the request that was sent.
    #[error("reply id mismatch: expected {expected}, got {actual}")]
    IdMismatch { expected: String, actual: String },

    /// The result could not be converted to the requested type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
