use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MessageError, Result};

/// Error object carried in a reply envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("rpc error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// A decoded reply envelope.
///
/// Only a JSON object carrying `result` or `error` is an envelope; arrays,
/// scalars and unrelated objects fail to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Reply {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
    pub id: Option<Value>,
}

#[derive(Deserialize)]
struct ReplyFields {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
    #[serde(default)]
    id: Option<Value>,
}

impl TryFrom<Map<String, Value>> for Reply {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        if !map.contains_key("result") && !map.contains_key("error") {
            return Err(serde::de::Error::custom(
                "reply object has neither result nor error",
            ));
        }
        let fields: ReplyFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            result: fields.result,
            error: fields.error,
            id: fields.id,
        })
    }
}

impl Reply {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The reply id when it is a string token.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }

    /// `Ok(result)` for a success envelope (a null result becomes
    /// `Value::Null`), `Err` with the node's error otherwise.
    pub fn into_result(self) -> std::result::Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// Decode a reply body produced by the reply reader.
pub fn decode_reply(body: &[u8]) -> Result<Reply> {
    serde_json::from_slice(body).map_err(MessageError::Decode)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope() {
        let reply = decode_reply(br#"{"result":812,"error":null,"id":"noderpc-3"}"#).unwrap();
        assert!(!reply.is_error());
        assert_eq!(reply.id_str(), Some("noderpc-3"));
        assert_eq!(reply.into_result().unwrap(), json!(812));
    }

    #[test]
    fn null_result_is_success() {
        let reply = decode_reply(br#"{"result":null,"error":null,"id":"x"}"#).unwrap();
        assert_eq!(reply.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn error_envelope() {
        let body = br#"{"result":null,"error":{"code":-5,"message":"Invalid Bitcoin address"},"id":"x"}"#;
        let reply = decode_reply(body).unwrap();
        assert!(reply.is_error());
        let err = reply.into_result().unwrap_err();
        assert_eq!(err.code, -5);
        assert_eq!(err.to_string(), "rpc error -5: Invalid Bitcoin address");
    }

    #[test]
    fn non_envelope_bodies_fail_to_decode() {
        assert!(matches!(decode_reply(b""), Err(MessageError::Decode(_))));
        assert!(matches!(
            decode_reply(b"<html>401</html>"),
            Err(MessageError::Decode(_))
        ));
        assert!(matches!(decode_reply(b"[1]"), Err(MessageError::Decode(_))));
    }

    #[test]
    fn arrays_and_bare_objects_are_not_envelopes() {
        let bodies: [&[u8]; 7] = [
            b"[]",
            b"[1]",
            br#"[812,null,"noderpc-1"]"#,
            b"{}",
            br#"{"id":"noderpc-1"}"#,
            b"812",
            b"null",
        ];
        for body in bodies {
            assert!(
                matches!(decode_reply(body), Err(MessageError::Decode(_))),
                "{} decoded as a reply",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn missing_id_and_error_fields_default_to_none() {
        let reply = decode_reply(br#"{"result":[1,2]}"#).unwrap();
        assert_eq!(reply.id, None);
        assert_eq!(reply.into_result().unwrap(), json!([1, 2]));
    }

    #[test]
    fn numeric_id_is_kept_but_not_a_token() {
        let reply = decode_reply(br#"{"result":true,"error":null,"id":1}"#).unwrap();
        assert_eq!(reply.id, Some(json!(1)));
        assert_eq!(reply.id_str(), None);
    }
}
