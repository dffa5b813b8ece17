use std::io::Read;
use std::sync::Arc;

use crate::credentials::Credentials;
use crate::error::Result;

/// Delivers serialized requests to a node.
///
/// Implementations own connection handling, authentication and timeouts.
/// The returned stream carries the reply body; callers drain it and drop
/// it. Retries, if any, happen inside the implementation.
pub trait Transport {
    /// Reply body stream.
    type Stream: Read;

    /// Send `body` to `target` and return the reply body stream.
    fn post(&self, credentials: &Credentials, target: &str, body: &[u8]) -> Result<Self::Stream>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Stream = T::Stream;

    fn post(&self, credentials: &Credentials, target: &str, body: &[u8]) -> Result<Self::Stream> {
        (**self).post(credentials, target, body)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Stream = T::Stream;

    fn post(&self, credentials: &Credentials, target: &str, body: &[u8]) -> Result<Self::Stream> {
        (**self).post(credentials, target, body)
    }
}
