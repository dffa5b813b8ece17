use noderpc_command::{Arity, Kind, KindSet};

/// Errors raised while building requests or reading replies.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The command name is not in the registry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The request carries an empty method name.
    #[error("request method must not be empty")]
    EmptyMethod,

    /// Fewer arguments than the command requires.
    #[error("too few arguments for {command}: got {got}, expected {expected}")]
    TooFewArguments {
        command: String,
        got: usize,
        expected: Arity,
    },

    /// More arguments than the command accepts.
    #[error("too many arguments for {command}: got {got}, expected {expected}")]
    TooManyArguments {
        command: String,
        got: usize,
        expected: Arity,
    },

    /// An argument has the wrong kind for its position.
    #[error("argument {position} of {command} must be {expected}, got {actual}")]
    TypeMismatch {
        command: String,
        position: usize,
        expected: KindSet,
        actual: Kind,
    },

    /// A float argument is NaN or infinite and has no JSON form.
    #[error("argument {position} of {command} must be a finite number, got {value}")]
    NonFiniteFloat {
        command: String,
        position: usize,
        value: f64,
    },

    /// Pre-serialized request bytes are not a JSON-RPC request object.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The reply stream failed or ended early.
    #[error("failed reading reply: {0}")]
    Read(#[source] std::io::Error),

    /// The reply exceeded the configured size limit.
    #[error("reply too large (more than {max} bytes)")]
    ReplyTooLarge { max: usize },

    /// The reply body is not a JSON-RPC reply envelope.
    #[error("failed decoding reply: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be serialized.
    #[error("failed encoding request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl MessageError {
    /// True for errors that describe a bad call shape rather than I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MessageError::UnknownCommand(_)
                | MessageError::EmptyMethod
                | MessageError::TooFewArguments { .. }
                | MessageError::TooManyArguments { .. }
                | MessageError::TypeMismatch { .. }
                | MessageError::NonFiniteFloat { .. }
                | MessageError::MalformedRequest(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MessageError>;
