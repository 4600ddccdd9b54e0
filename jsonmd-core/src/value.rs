//! JSON value model
//!
//! The transcriber never looks at `serde_json::Value` directly. Input is first
//! lifted into [`JsonValue`], a closed three-way variant (object, array, scalar)
//! that the transcriber can match exhaustively.

use crate::error::TranscribeError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Insertion-ordered object entries. Key order is heading order.
pub type Map = IndexMap<String, JsonValue>;

/// A parsed JSON document node.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Object(Map),
    Array(Vec<JsonValue>),
    Scalar(Scalar),
}

/// Leaf values.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

/// Coarse kind of a value, used when reporting what was found where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

impl JsonValue {
    /// Parse JSON text, keeping object keys in document order.
    pub fn from_json_str(source: &str) -> Result<Self, TranscribeError> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|e| TranscribeError::Parse(e.to_string()))?;
        Ok(value.into())
    }

    /// Lift any serializable Rust value into the JSON model.
    ///
    /// Fails when the data has no JSON shape, e.g. a map keyed by tuples. The
    /// error names the Rust type that was passed in. Non-finite floats (NaN and
    /// the infinities) have no JSON literal and become `null`, as serde_json
    /// serializes them.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, TranscribeError> {
        serde_json::to_value(value)
            .map(JsonValue::from)
            .map_err(|e| TranscribeError::UnsupportedValue {
                type_name: std::any::type_name::<T>().to_string(),
                message: e.to_string(),
            })
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Object(_) => ValueKind::Object,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Scalar(Scalar::String(_)) => ValueKind::String,
            JsonValue::Scalar(Scalar::Number(_)) => ValueKind::Number,
            JsonValue::Scalar(Scalar::Bool(_)) => ValueKind::Boolean,
            JsonValue::Scalar(Scalar::Null) => ValueKind::Null,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Natural string form of a value.
    ///
    /// Strings are unquoted, numbers keep their source text, `null` is the
    /// literal `null`. Containers collapse to compact JSON text, which is how
    /// arrays show nested structure inside a bullet.
    pub fn to_text(&self) -> String {
        match self {
            JsonValue::Scalar(scalar) => scalar.to_string(),
            container => serde_json::Value::from(container).to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::String(s) => JsonValue::Scalar(Scalar::String(s)),
            serde_json::Value::Number(n) => JsonValue::Scalar(Scalar::Number(n)),
            serde_json::Value::Bool(b) => JsonValue::Scalar(Scalar::Bool(b)),
            serde_json::Value::Null => JsonValue::Scalar(Scalar::Null),
        }
    }
}

impl From<&JsonValue> for serde_json::Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Scalar(Scalar::String(s)) => serde_json::Value::String(s.clone()),
            JsonValue::Scalar(Scalar::Number(n)) => serde_json::Value::Number(n.clone()),
            JsonValue::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            JsonValue::Scalar(Scalar::Null) => serde_json::Value::Null,
        }
    }
}
