//! Validated JSON-RPC command construction for cryptocurrency nodes.
//!
//! noderpc checks every remote call against a registry of command
//! signatures before any bytes exist to send, builds JSON-RPC 1.0 request
//! envelopes, and reads reply bodies with bounded memory.
//!
//! # Crate Structure
//!
//! - [`command`]: Command registry, signatures and dynamic argument values
//! - [`message`]: Request building, reply reading and reply decoding
//! - [`transport`]: Transport abstraction (HTTP behind the `http` feature)
//! - [`client`]: Blocking client tying it together (behind `client` feature)

/// Re-export command registry types.
pub mod command {
    pub use noderpc_command::*;
}

/// Re-export message types.
pub mod message {
    pub use noderpc_message::*;
}

/// Re-export transport types.
pub mod transport {
    pub use noderpc_transport::*;
}

/// Re-export client types (requires `client` feature).
#[cfg(feature = "client")]
pub mod client {
    pub use noderpc_client::*;
}

pub use noderpc_message::args;
