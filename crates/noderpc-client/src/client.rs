use std::sync::Arc;

use noderpc_command::{CommandRegistry, DynamicValue};
use noderpc_message::{
    decode_reply, validate_raw_request, MessageBuilder, Reply, ReplyReader, RequestEnvelope,
};
use noderpc_transport::{Credentials, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Blocking node RPC client.
///
/// Every call is validated against the command registry before the
/// transport sees a single byte.
pub struct Client<T> {
    transport: T,
    builder: MessageBuilder,
    reader: ReplyReader,
    target: String,
    credentials: Credentials,
    check_reply_id: bool,
}

impl<T: Transport> Client<T> {
    /// Create a client over the standard command registry.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_registry(transport, Arc::new(CommandRegistry::standard()), config)
    }

    /// Create a client over a shared registry.
    pub fn with_registry(
        transport: T,
        registry: Arc<CommandRegistry>,
        config: ClientConfig,
    ) -> Self {
        Self {
            transport,
            builder: MessageBuilder::with_config(registry, config.builder),
            reader: ReplyReader::with_config(config.reader),
            target: config.target,
            credentials: config.credentials,
            check_reply_id: config.check_reply_id,
        }
    }

    /// Validate a call and build its envelope without sending it.
    pub fn build(
        &self,
        name: &str,
        args: impl Into<Vec<DynamicValue>>,
    ) -> Result<RequestEnvelope> {
        Ok(self.builder.build(name, args)?)
    }

    /// Invoke `name` and return its result.
    ///
    /// An error envelope from the node becomes [`ClientError::Rpc`].
    pub fn call(&self, name: &str, args: impl Into<Vec<DynamicValue>>) -> Result<Value> {
        let envelope = self.builder.build(name, args)?;
        let body = envelope.encode()?;
        let reply = self.exchange(&body)?;

        if self.check_reply_id && reply.id_str() != Some(envelope.id()) {
            let actual = reply
                .id
                .as_ref()
                .map_or_else(|| "<none>".to_string(), ToString::to_string);
            warn!(method = name, expected = envelope.id(), actual = %actual, "reply id mismatch");
            return Err(ClientError::IdMismatch {
                expected: envelope.id().to_string(),
                actual,
            });
        }

        Ok(reply.into_result()?)
    }

    /// Invoke `name` and deserialize its result into `R`.
    pub fn call_as<R: DeserializeOwned>(
        &self,
        name: &str,
        args: impl Into<Vec<DynamicValue>>,
    ) -> Result<R> {
        let value = self.call(name, args)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send pre-serialized request bytes.
    ///
    /// The body is not checked against the registry, but a request without
    /// a non-empty `method` is refused before transmission.
    pub fn send_raw(&self, body: &[u8]) -> Result<Reply> {
        let method = validate_raw_request(body)?;
        debug!(method = %method, bytes = body.len(), "sending raw request");
        self.exchange(body)
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        self.builder.registry()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn exchange(&self, body: &[u8]) -> Result<Reply> {
        let stream = self.transport.post(&self.credentials, &self.target, body)?;
        let bytes = self.reader.read(stream)?;
        let reply = decode_reply(&bytes)?;
        debug!(
            target_addr = %self.target,
            reply_bytes = bytes.len(),
            is_error = reply.is_error(),
            "received reply"
        );
        Ok(reply)
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("target", &self.target)
            .field("credentials", &self.credentials)
            .field("check_reply_id", &self.check_reply_id)
            .finish_non_exhaustive()
    }
}
