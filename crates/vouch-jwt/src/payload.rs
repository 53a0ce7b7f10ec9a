//! Token payload.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::TokenError;

/// Payload of a signed token.
///
/// `Claims` payloads are string-keyed JSON objects; only these are
/// eligible for `exp`/`nbf` checks during verification. Any other JSON
/// value rides along as `Opaque` and is never inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Claims(Map<String, Value>),
    Opaque(Value),
}

impl Payload {
    /// Build a payload from any serializable value.
    pub fn from_value<T: Serialize>(value: &T) -> Result<Self, TokenError> {
        let value = serde_json::to_value(value).map_err(TokenError::EncodingFailed)?;
        Ok(Self::from_json(value))
    }

    /// Wrap an already-parsed JSON value.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Claims(map),
            other => Self::Opaque(other),
        }
    }

    /// The payload as a JSON value.
    pub fn as_json(&self) -> Value {
        match self {
            Self::Claims(map) => Value::Object(map.clone()),
            Self::Opaque(value) => value.clone(),
        }
    }

    /// Deserialize the payload into a concrete type.
    pub fn to_value<T: DeserializeOwned>(&self) -> Result<T, TokenError> {
        serde_json::from_value(self.as_json()).map_err(TokenError::MalformedJson)
    }

    /// Serialize to the JSON bytes that form the payload segment.
    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, TokenError> {
        match self {
            Self::Claims(map) => serde_json::to_vec(map).map_err(TokenError::EncodingFailed),
            Self::Opaque(value) => serde_json::to_vec(value).map_err(TokenError::EncodingFailed),
        }
    }

    /// Read a numeric claim as whole Unix seconds.
    ///
    /// Floats are rounded to the nearest second. Returns `None` for opaque
    /// payloads, absent claims, and non-numeric claim values.
    pub fn claim_seconds(&self, name: &str) -> Option<i64> {
        let Self::Claims(map) = self else {
            return None;
        };
        let value = map.get(name)?;
        if let Some(n) = value.as_i64() {
            return Some(n);
        }
        value.as_f64().map(|f| f.round() as i64)
    }
}
