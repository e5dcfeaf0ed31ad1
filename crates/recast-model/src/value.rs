//! Typed scalar values stored in record fields.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

/// A single typed value held by a record field.
///
/// Values keep their original type until a caller asks for the text
/// projection (`Display` / [`Value::to_text`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Opaque value supplied by the caller, identified by a type tag.
    Other { type_tag: String, bytes: Vec<u8> },
}

impl Value {
    /// Build an opaque value with the given type tag.
    pub fn other(type_tag: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Value::Other {
            type_tag: type_tag.into(),
            bytes: bytes.into(),
        }
    }

    /// Name of the stored variant, used in type mismatch reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Other { .. } => "other",
        }
    }

    /// Returns true for empty text, the only value `add` ignores.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(text) if text.is_empty())
    }

    /// Canonical text projection of this value.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Convert a JSON value into record values.
    ///
    /// `null` yields nothing and arrays yield one value per element. Objects
    /// and nested arrays are kept whole as an `Other` value tagged `json`.
    pub fn from_json(json: &serde_json::Value) -> Vec<Value> {
        match json {
            serde_json::Value::Array(items) => items
                .iter()
                .filter(|item| !item.is_null())
                .map(json_scalar)
                .collect(),
            serde_json::Value::Null => Vec::new(),
            other => vec![json_scalar(other)],
        }
    }
}

fn json_scalar(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            // above i64::MAX: keep the digits
            None if n.is_u64() => Value::other("json", n.to_string()),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Text(s.clone()),
        serde_json::Value::Null
        | serde_json::Value::Array(_)
        | serde_json::Value::Object(_) => Value::other("json", json.to_string()),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Int(value) => write!(f, "{value}"),
            // Debug keeps the fractional part: 10.0 rather than 10
            Value::Float(value) => write!(f, "{value:?}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Value::DateTime(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.f")),
            Value::Other { bytes, .. } => match std::str::from_utf8(bytes) {
                Ok(text) => f.write_str(text),
                Err(_) => f.write_str(&hex::encode(bytes)),
            },
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Date(_) | Value::DateTime(_) | Value::Other { .. } => {
                serializer.collect_str(self)
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(i64::from(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

/// Checked extraction of a concrete type from a [`Value`].
///
/// Extraction never coerces between variants: an `Int` is not an `f64` and a
/// `Text` holding digits is not an `i64`.
pub trait FromValue: Sized {
    /// Type name reported in mismatch errors.
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    const TYPE_NAME: &'static str = "any";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "text";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl FromValue for i32 {
    const TYPE_NAME: &'static str = "i32";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int().and_then(|v| i32::try_from(v).ok())
    }
}

impl FromValue for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl FromValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for NaiveDate {
    const TYPE_NAME: &'static str = "date";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_date()
    }
}

impl FromValue for NaiveDateTime {
    const TYPE_NAME: &'static str = "datetime";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(datetime) => Some(*datetime),
            _ => None,
        }
    }
}

/// Anything that can be added to a field: a single value or a sequence of
/// values, flattened one level.
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

macro_rules! scalar_into_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoValues for $ty {
                fn into_values(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

scalar_into_values!(
    Value,
    String,
    &str,
    &String,
    i64,
    i32,
    u32,
    f64,
    f32,
    bool,
    NaiveDate,
    NaiveDateTime,
);

impl<T: Into<Value>> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<Value>> IntoValues for &[T] {
    fn into_values(self) -> Vec<Value> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T: IntoValues> IntoValues for Option<T> {
    fn into_values(self) -> Vec<Value> {
        self.map(IntoValues::into_values).unwrap_or_default()
    }
}
