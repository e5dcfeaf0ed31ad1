//! The record type: construction, retrieval, and structural mutation.
//!
//! Reads are strict and fail with [`RecordError::FieldNotFound`] when the
//! field is missing. Mutations are forgiving: renaming, copying, or removing
//! a missing field leaves the record unchanged.

use indexmap::IndexMap;
use indexmap::map::Entry;
use recast_model::{FromValue, IntoValues, RecordError, Result, Value};
use tracing::{debug, trace};

use crate::field::FieldValues;
use crate::pattern::FieldPattern;

/// Ordered mapping from field name to one or more typed values.
///
/// Field order is insertion order and shows up in rendering and projections.
/// Equality ignores field order but compares each field's values in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub(crate) fields: IndexMap<String, FieldValues>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Append `value` to `field`, creating the field if needed.
    ///
    /// Sequences are flattened one level. Empty text, empty sequences, and
    /// `None` add nothing, so no field is created for them.
    pub fn add(&mut self, field: impl Into<String>, value: impl IntoValues) -> &mut Self {
        let field = field.into();
        let values: Vec<Value> = value
            .into_values()
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();
        if values.is_empty() {
            trace!(field = %field, "skipping empty value");
            return self;
        }
        match self.fields.entry(field) {
            Entry::Occupied(mut entry) => entry.get_mut().extend(values),
            Entry::Vacant(entry) => {
                if let Some(values) = FieldValues::from_values(values) {
                    entry.insert(values);
                }
            }
        }
        self
    }

    /// Append every element of `values` to `field`.
    pub fn add_all<I>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.add(field, values)
    }

    /// Add every key/value pair of an external mapping.
    pub fn load<I, K, V>(&mut self, mapping: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoValues,
    {
        for (field, value) in mapping {
            self.add(field, value);
        }
        self
    }

    /// Add every member of a JSON object (see [`Value::from_json`]).
    pub fn load_json(&mut self, object: &serde_json::Map<String, serde_json::Value>) -> &mut Self {
        for (field, json) in object {
            self.add(field.as_str(), Value::from_json(json));
        }
        self
    }

    // =========================================================================
    // Retrieval
    // =========================================================================

    /// Values of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&FieldValues> {
        self.fields.get(field)
    }

    fn require(&self, field: &str) -> Result<&FieldValues> {
        self.fields
            .get(field)
            .ok_or_else(|| RecordError::field_not_found(field))
    }

    /// Text projection of the first value of `field`.
    pub fn value_of(&self, field: &str) -> Result<String> {
        Ok(self.require(field)?.first().to_text())
    }

    /// Text projection of every value of `field`.
    pub fn values_of(&self, field: &str) -> Result<Vec<String>> {
        Ok(self.require(field)?.texts())
    }

    /// First value of `field` read as `T`.
    pub fn raw_value_of<T: FromValue>(&self, field: &str) -> Result<T> {
        extract(field, self.require(field)?.first())
    }

    /// Every value of `field` read as `T`.
    pub fn raw_values_of<T: FromValue>(&self, field: &str) -> Result<Vec<T>> {
        self.require(field)?
            .iter()
            .map(|value| extract(field, value))
            .collect()
    }

    pub fn is_single_value(&self, field: &str) -> Result<bool> {
        Ok(self.require(field)?.is_single())
    }

    pub fn is_multi_value(&self, field: &str) -> Result<bool> {
        Ok(self.require(field)?.is_multi())
    }

    /// Number of values stored under `field`.
    pub fn size_of(&self, field: &str) -> Result<usize> {
        Ok(self.require(field)?.len())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in record order.
    pub fn fields(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Field names matching `pattern`, in record order.
    pub fn fields_matching(&self, pattern: &FieldPattern) -> Vec<&str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|name| pattern.matches(name))
            .collect()
    }

    /// True if any value in any field has the same text projection as `value`.
    pub fn has_value(&self, value: impl Into<Value>) -> bool {
        let needle = value.into().to_text();
        self.fields
            .values()
            .any(|values| values.iter().any(|v| v.to_text() == needle))
    }

    /// True if a value of `field` has the same text projection as `value`.
    pub fn has_value_in(&self, field: &str, value: impl Into<Value>) -> bool {
        let needle = value.into().to_text();
        self.fields
            .get(field)
            .is_some_and(|values| values.iter().any(|v| v.to_text() == needle))
    }

    pub fn has_not_value(&self, value: impl Into<Value>) -> bool {
        !self.has_value(value)
    }

    pub fn has_not_value_in(&self, field: &str, value: impl Into<Value>) -> bool {
        !self.has_value_in(field, value)
    }

    /// One `(field, value)` pair per stored value, in record order.
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        self.fields
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |value| (name.as_str(), value)))
            .collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValues)> {
        self.fields
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    // =========================================================================
    // Structural mutation
    // =========================================================================

    /// Move `old` to `new`, keeping its position in the field order.
    ///
    /// An existing `new` field is replaced by the values of `old`.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> &mut Self {
        let new = new.into();
        if old == new {
            return self;
        }
        let Some(index) = self.fields.get_index_of(old) else {
            trace!(field = old, "rename skipped: field absent");
            return self;
        };
        let index = match self.fields.shift_remove_full(new.as_str()) {
            Some((replaced, ..)) if replaced < index => index - 1,
            _ => index,
        };
        if let Some((_, values)) = self.fields.shift_remove_index(index) {
            self.fields.shift_insert(index, new, values);
        }
        self
    }

    /// Rename every field matching `pattern` to `rename(name)`.
    ///
    /// Matching is evaluated once, before any field is renamed. Renames then
    /// run one at a time in field order with [`Record::rename`] semantics: a
    /// new name that hits an existing field replaces it, and a field renamed
    /// onto a later matched name is renamed again when that name comes up.
    /// With fields `a, b` and `a -> b, b -> c`, the record ends as `c` holding
    /// the values of `a`.
    pub fn rename_matching(
        &mut self,
        pattern: &FieldPattern,
        mut rename: impl FnMut(&str) -> String,
    ) -> &mut Self {
        let matched = self.matching_names(pattern);
        debug!(pattern = %pattern, matched = matched.len(), "renaming fields");
        for name in matched {
            let new = rename(&name);
            self.rename(&name, new);
        }
        self
    }

    /// Duplicate the values of `field` under `new`, replacing any existing `new`.
    pub fn copy(&mut self, field: &str, new: impl Into<String>) -> &mut Self {
        let new = new.into();
        if field == new {
            return self;
        }
        match self.fields.get(field) {
            Some(values) => {
                let values = values.clone();
                self.fields.insert(new, values);
            }
            None => trace!(field, "copy skipped: field absent"),
        }
        self
    }

    pub fn remove(&mut self, field: &str) -> &mut Self {
        self.fields.shift_remove(field);
        self
    }

    /// Remove each named field; names not present are ignored.
    pub fn remove_all<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for field in fields {
            self.fields.shift_remove(field.as_ref());
        }
        self
    }

    pub fn remove_matching(&mut self, pattern: &FieldPattern) -> &mut Self {
        let matched = self.matching_names(pattern);
        debug!(pattern = %pattern, matched = matched.len(), "removing fields");
        self.remove_all(matched)
    }

    /// Snapshot of the field names matching `pattern`.
    pub(crate) fn matching_names(&self, pattern: &FieldPattern) -> Vec<String> {
        self.fields_matching(pattern)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

pub(crate) fn extract<T: FromValue>(field: &str, value: &Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| RecordError::TypeMismatch {
        field: field.to_string(),
        expected: T::TYPE_NAME,
        found: value.type_name(),
    })
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValues);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValues>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: IntoValues,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.load(iter);
        record
    }
}

impl<K, V> Extend<(K, V)> for Record
where
    K: Into<String>,
    V: IntoValues,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.load(iter);
    }
}
