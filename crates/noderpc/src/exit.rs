use std::fmt;
use std::io;

use noderpc_client::ClientError;
use noderpc_message::MessageError;
use noderpc_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::UnexpectedEof => TRANSPORT_ERROR,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Io(source) => io_error(context, source),
        TransportError::InvalidTarget(_) => CliError::new(USAGE, format!("{context}: {err}")),
        TransportError::Unauthorized { .. } => {
            CliError::new(PERMISSION_DENIED, format!("{context}: {err}"))
        }
        TransportError::Timeout { .. } => CliError::new(TIMEOUT, format!("{context}: {err}")),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn message_error(context: &str, err: MessageError) -> CliError {
    match err {
        MessageError::Read(source) => io_error(context, source),
        MessageError::UnknownCommand(_) => CliError::new(USAGE, format!("{context}: {err}")),
        MessageError::Decode(_) => CliError::new(FAILURE, format!("{context}: {err}")),
        MessageError::Encode(_) => CliError::new(INTERNAL, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn client_error(context: &str, err: ClientError) -> CliError {
    match err {
        ClientError::Message(err) => message_error(context, err),
        ClientError::Transport(err) => transport_error(context, err),
        ClientError::Json(err) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        other => CliError::new(FAILURE, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use noderpc_command::{Kind, KindSet};
    use noderpc_message::RpcError;

    use super::*;

    #[test]
    fn validation_errors_map_to_data_invalid_or_usage() {
        let unknown = message_error("build", MessageError::UnknownCommand("nope".into()));
        assert_eq!(unknown.code, USAGE);
        assert_eq!(unknown.message, "build: unknown command: nope");

        let mismatch = message_error(
            "build",
            MessageError::TypeMismatch {
                command: "getblockhash".into(),
                position: 0,
                expected: KindSet::of(Kind::Integer),
                actual: Kind::String,
            },
        );
        assert_eq!(mismatch.code, DATA_INVALID);
    }

    #[test]
    fn transport_errors_map_to_distinct_codes() {
        let unauthorized = transport_error(
            "call",
            TransportError::Unauthorized {
                target: "n".into(),
                status: 401,
            },
        );
        assert_eq!(unauthorized.code, PERMISSION_DENIED);

        let timeout = transport_error(
            "call",
            TransportError::Timeout {
                target: "n".into(),
                timeout: Duration::from_secs(1),
            },
        );
        assert_eq!(timeout.code, TIMEOUT);

        let unreachable = transport_error(
            "call",
            TransportError::Unreachable {
                target: "n".into(),
                reason: "refused".into(),
            },
        );
        assert_eq!(unreachable.code, TRANSPORT_ERROR);
    }

    #[test]
    fn rpc_error_is_general_failure() {
        let err = client_error(
            "call",
            ClientError::Rpc(RpcError {
                code: -8,
                message: "Block height out of range".into(),
            }),
        );
        assert_eq!(err.code, FAILURE);
        assert_eq!(err.message, "call: rpc error -8: Block height out of range");
    }

    #[test]
    fn read_failure_follows_io_kind() {
        let err = client_error(
            "call",
            ClientError::Message(MessageError::Read(io::Error::from(
                io::ErrorKind::UnexpectedEof,
            ))),
        );
        assert_eq!(err.code, TRANSPORT_ERROR);
    }
}
