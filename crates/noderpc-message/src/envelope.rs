use bytes::Bytes;
use noderpc_command::DynamicValue;
use serde::Serialize;
use serde_json::Value;

use crate::error::{MessageError, Result};

/// Protocol version marker carried by every request.
pub const JSONRPC_VERSION: &str = "1.0";

/// A validated request, ready to serialize.
///
/// Only [`MessageBuilder`](crate::MessageBuilder) constructs envelopes, and
/// only after the arguments passed signature validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    method: String,
    params: Vec<DynamicValue>,
    id: String,
}

#[derive(Serialize)]
struct WireRequest<'a> {
    jsonrpc: &'static str,
    id: &'a str,
    method: &'a str,
    params: &'a [DynamicValue],
}

impl RequestEnvelope {
    pub(crate) fn new(method: String, params: Vec<DynamicValue>, id: String) -> Self {
        Self { method, params, id }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Arguments in the order the caller supplied them.
    pub fn params(&self) -> &[DynamicValue] {
        &self.params
    }

    /// Correlation token echoed back in the reply.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Serialize to the JSON-RPC 1.0 wire form.
    pub fn encode(&self) -> Result<Bytes> {
        serde_json::to_vec(&self.wire())
            .map(Bytes::from)
            .map_err(MessageError::Encode)
    }

    /// The request as a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self.wire()).map_err(MessageError::Encode)
    }

    fn wire(&self) -> WireRequest<'_> {
        WireRequest {
            jsonrpc: JSONRPC_VERSION,
            id: &self.id,
            method: &self.method,
            params: &self.params,
        }
    }
}

/// Check pre-serialized request bytes before they are handed to a
/// transport. Returns the method name.
///
/// The body must be a JSON object whose `method` is a non-empty string.
pub fn validate_raw_request(body: &[u8]) -> Result<String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| MessageError::MalformedRequest(format!("invalid JSON: {err}")))?;
    let Value::Object(map) = value else {
        return Err(MessageError::MalformedRequest(
            "expected a JSON object".to_string(),
        ));
    };

    match map.get("method") {
        None | Some(Value::Null) => Err(MessageError::EmptyMethod),
        Some(Value::String(method)) if method.is_empty() => Err(MessageError::EmptyMethod),
        Some(Value::String(method)) => Ok(method.clone()),
        Some(_) => Err(MessageError::MalformedRequest(
            "method must be a string".to_string(),
        )),
    }
}
