use crate::error::{PkgHashError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-supplied extra entropy mixed into a single fingerprint.
///
/// Bytes and text are used verbatim. Objects and lists are serialized as
/// RFC 8785 canonical JSON, so two objects with the same entries always
/// produce the same salt regardless of insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Salt {
    Bytes(Vec<u8>),
    Text(String),
    Object(Map<String, Value>),
    List(Vec<Value>),
}

impl Salt {
    /// Build a salt from any serializable value.
    ///
    /// Fails with [`PkgHashError::InvalidSaltType`] if the value serializes
    /// to a number, boolean, or null.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Self::try_from(serde_json::to_value(value)?)
    }

    /// The exact bytes fed to the hash.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Bytes(bytes) => bytes.clone(),
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::Object(map) => serde_jcs::to_vec(map)?,
            Self::List(items) => serde_jcs::to_vec(items)?,
        })
    }
}

impl TryFrom<Value> for Salt {
    type Error = PkgHashError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Object(map) => Ok(Self::Object(map)),
            Value::Array(items) => Ok(Self::List(items)),
            Value::Number(_) => Err(PkgHashError::InvalidSaltType { kind: "number" }),
            Value::Bool(_) => Err(PkgHashError::InvalidSaltType { kind: "boolean" }),
            Value::Null => Err(PkgHashError::InvalidSaltType { kind: "null" }),
        }
    }
}

impl From<&str> for Salt {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Salt {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for Salt {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Salt {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Map<String, Value>> for Salt {
    fn from(map: Map<String, Value>) -> Self {
        Self::Object(map)
    }
}
