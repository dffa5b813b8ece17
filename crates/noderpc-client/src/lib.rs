//! Blocking JSON-RPC client for a cryptocurrency node.
//!
//! This is the "just works" layer. A [`Client`] validates each call against
//! the command registry, sends it through a [`Transport`], reads the reply
//! with bounded memory and decodes it.
//!
//! ```
//! use noderpc_client::{Client, ClientConfig, ClientError};
//! use noderpc_message::{args, MessageError};
//! # use noderpc_transport::{Credentials, Transport};
//! # struct Offline;
//! # impl Transport for Offline {
//! #     type Stream = std::io::Empty;
//! #     fn post(&self, _: &Credentials, _: &str, _: &[u8]) -> noderpc_transport::Result<Self::Stream> {
//! #         Ok(std::io::empty())
//! #     }
//! # }
//!
//! let client = Client::new(Offline, ClientConfig::default());
//! let err = client.call("getblockhash", args!["not a height"]).unwrap_err();
//! assert!(matches!(err, ClientError::Message(MessageError::TypeMismatch { .. })));
//! ```

pub mod client;
pub mod config;
pub mod error;

#[cfg(feature = "http")]
pub mod connector;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_TARGET};
pub use error::{ClientError, Result};
pub use noderpc_transport::{Credentials, Transport};

#[cfg(feature = "http")]
pub use connector::{connect, connect_with_config};
