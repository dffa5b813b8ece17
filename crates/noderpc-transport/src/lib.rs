//! Transport abstraction for node RPC.
//!
//! The message layer hands a [`Transport`] fully serialized request bytes,
//! the caller's [`Credentials`] and a target; the transport hands back a
//! readable reply body or a [`TransportError`].
//!
//! With the `http` feature, [`HttpTransport`] posts requests over blocking
//! HTTP with basic authentication, the way the node's RPC port expects.

pub mod credentials;
pub mod error;
pub mod traits;

#[cfg(feature = "http")]
pub mod http;

pub use credentials::Credentials;
pub use error::{Result, TransportError};
pub use traits::Transport;

#[cfg(feature = "http")]
pub use http::{endpoint, HttpConfig, HttpTransport, DEFAULT_HTTP_TIMEOUT};
