//! Validated request construction and reply reading for node JSON-RPC.
//!
//! This crate sits between callers and the transport:
//! - [`MessageBuilder`] checks a command name and its arguments against the
//!   [`CommandRegistry`] and produces a [`RequestEnvelope`]
//! - [`ReplyReader`] drains a transport stream into a byte buffer
//! - [`decode_reply`] turns that buffer into a [`Reply`]
//!
//! Nothing here performs network I/O. A malformed call is rejected before
//! any bytes exist to send.

pub mod args;
pub mod builder;
pub mod config;
pub mod envelope;
pub mod error;
pub mod reader;
pub mod reply;

pub use args::ArgList;
pub use builder::{validate_args, MessageBuilder};
pub use config::{BuilderConfig, ReaderConfig, DEFAULT_ID_PREFIX, DEFAULT_MAX_REPLY_SIZE};
pub use envelope::{validate_raw_request, RequestEnvelope, JSONRPC_VERSION};
pub use error::{MessageError, Result};
pub use noderpc_command::{CommandRegistry, DynamicValue, Kind, KindSet, Signature};
pub use reader::{read_reply, ReplyReader};
pub use reply::{decode_reply, Reply, RpcError};
