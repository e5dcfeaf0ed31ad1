//! Flat map projections and the canonical text rendering of a record.

use std::fmt;

use indexmap::IndexMap;
use recast_model::Value;
use serde::{Serialize, Serializer};

use crate::field::FieldValues;
use crate::record::Record;

/// A field as seen through [`Record::as_map`]: the bare value when the field
/// is single-valued, the whole sequence otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MapValue {
    Single(Value),
    Many(Vec<Value>),
}

impl MapValue {
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            MapValue::Single(value) => Some(value),
            MapValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Value]> {
        match self {
            MapValue::Single(_) => None,
            MapValue::Many(values) => Some(values),
        }
    }
}

impl From<&FieldValues> for MapValue {
    fn from(values: &FieldValues) -> Self {
        if values.is_single() {
            MapValue::Single(values.first().clone())
        } else {
            MapValue::Many(values.as_slice().to_vec())
        }
    }
}

impl Record {
    /// Single-valued fields map to their value, multi-valued fields to the
    /// full sequence. Raw types are kept.
    pub fn as_map(&self) -> IndexMap<String, MapValue> {
        self.fields
            .iter()
            .map(|(name, values)| (name.clone(), MapValue::from(values)))
            .collect()
    }

    /// Every field reduced to its first raw value. Further values are dropped.
    pub fn as_single_level_map(&self) -> IndexMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, values)| (name.clone(), values.first().clone()))
            .collect()
    }

    /// Every field reduced to the text projection of its first value.
    pub fn as_single_level_string_map(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(name, values)| (name.clone(), values.first().to_text()))
            .collect()
    }

    /// Every field as the sequence of its raw values, whatever its size.
    pub fn as_raw_map(&self) -> IndexMap<String, Vec<Value>> {
        self.fields
            .iter()
            .map(|(name, values)| (name.clone(), values.as_slice().to_vec()))
            .collect()
    }
}

/// Renders `{name=[v1, v2], other=[v]}` with fields in record order.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (name, values)) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}=[{}]", values.texts().join(", "))?;
        }
        f.write_str("}")
    }
}

/// Serializes in the [`Record::as_map`] shape.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.fields
                .iter()
                .map(|(name, values)| (name, MapValue::from(values))),
        )
    }
}
