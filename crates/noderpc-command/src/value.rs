use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RegistryError;
use crate::kind::Kind;

/// A dynamically typed RPC argument.
///
/// Serializes untagged, so `Float(1.0)` goes on the wire as `1.0` and
/// `Integer(1)` as `1`. The two are never converted into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "Value")]
pub enum DynamicValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl DynamicValue {
    /// The dynamic kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            DynamicValue::String(_) => Kind::String,
            DynamicValue::Integer(_) => Kind::Integer,
            DynamicValue::Float(_) => Kind::Float,
            DynamicValue::Boolean(_) => Kind::Boolean,
        }
    }

    /// Interpret a command-line token.
    ///
    /// JSON scalars keep their JSON kind (`1` is an integer, `1.0` a float,
    /// `"1"` a string). Anything that is not a JSON scalar is taken as a
    /// bare string.
    pub fn parse_literal(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => {
                Self::try_from(value).unwrap_or_else(|_| Self::String(text.to_string()))
            }
            _ => Self::String(text.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl TryFrom<Value> for DynamicValue {
    type Error = RegistryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(DynamicValue::String(s)),
            Value::Bool(b) => Ok(DynamicValue::Boolean(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(DynamicValue::Integer(i))
                } else if n.is_u64() {
                    Err(RegistryError::UnsupportedValue(format!(
                        "integer {n} out of range"
                    )))
                } else {
                    n.as_f64().map(DynamicValue::Float).ok_or_else(|| {
                        RegistryError::UnsupportedValue(format!("number {n} not representable"))
                    })
                }
            }
            Value::Null => Err(RegistryError::UnsupportedValue("null".to_string())),
            Value::Array(_) => Err(RegistryError::UnsupportedValue("array".to_string())),
            Value::Object(_) => Err(RegistryError::UnsupportedValue("object".to_string())),
        }
    }
}

impl From<DynamicValue> for Value {
    fn from(value: DynamicValue) -> Self {
        match value {
            DynamicValue::String(s) => Value::String(s),
            DynamicValue::Integer(i) => Value::from(i),
            DynamicValue::Float(f) => Value::from(f),
            DynamicValue::Boolean(b) => Value::Bool(b),
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::String(s) => write!(f, "{s:?}"),
            DynamicValue::Integer(i) => write!(f, "{i}"),
            DynamicValue::Float(v) => write!(f, "{v:?}"),
            DynamicValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::String(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::String(value)
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> Self {
        DynamicValue::Integer(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        DynamicValue::Integer(i64::from(value))
    }
}

impl From<u32> for DynamicValue {
    fn from(value: u32) -> Self {
        DynamicValue::Integer(i64::from(value))
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Float(value)
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Boolean(value)
    }
}
