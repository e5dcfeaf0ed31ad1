//! Value transformation: caller-supplied transforms, join, and split.

use recast_model::{FromValue, Result, Value};
use tracing::{debug, trace};

use crate::field::FieldValues;
use crate::pattern::FieldPattern;
use crate::record::{Record, extract};

/// A value-to-value transformation applied to every value of a field.
///
/// Any `Fn(&Value) -> Value` closure is a transformer.
pub trait ValueTransformer {
    fn transform(&self, value: &Value) -> Value;
}

impl<F> ValueTransformer for F
where
    F: Fn(&Value) -> Value,
{
    fn transform(&self, value: &Value) -> Value {
        self(value)
    }
}

impl Record {
    /// Replace every value of `field` with its transformed value.
    pub fn apply(&mut self, field: &str, transformer: impl ValueTransformer) -> &mut Self {
        self.apply_in_place(field, &transformer);
        self
    }

    /// Write the transformed values of `field` to `target`, leaving `field`
    /// untouched. `target` is created or overwritten.
    pub fn apply_to(
        &mut self,
        field: &str,
        transformer: impl ValueTransformer,
        target: impl Into<String>,
    ) -> &mut Self {
        match self.fields.get(field) {
            Some(values) => {
                let transformed = values.map(|value| transformer.transform(value));
                self.fields.insert(target.into(), transformed);
            }
            None => trace!(field, "apply skipped: field absent"),
        }
        self
    }

    /// Apply `transformer` to every field whose name matches `pattern`.
    pub fn apply_matching(
        &mut self,
        pattern: &FieldPattern,
        transformer: impl ValueTransformer,
    ) -> &mut Self {
        let matched = self.matching_names(pattern);
        debug!(pattern = %pattern, matched = matched.len(), "applying transform");
        for name in matched {
            self.apply_in_place(&name, &transformer);
        }
        self
    }

    /// Typed transform: every value of `field` is read as `T` and replaced
    /// by `f(value)`.
    ///
    /// # Errors
    ///
    /// Returns [`recast_model::RecordError::TypeMismatch`] if any value is not
    /// a `T`; the record is left unchanged in that case.
    pub fn apply_as<T, U>(&mut self, field: &str, f: impl Fn(T) -> U) -> Result<&mut Self>
    where
        T: FromValue,
        U: Into<Value>,
    {
        if let Some(values) = self.typed_transform(field, f)? {
            self.fields.insert(field.to_string(), values);
        }
        Ok(self)
    }

    /// Typed transform writing its results to `target`.
    ///
    /// # Errors
    ///
    /// Same as [`Record::apply_as`].
    pub fn apply_as_to<T, U>(
        &mut self,
        field: &str,
        f: impl Fn(T) -> U,
        target: impl Into<String>,
    ) -> Result<&mut Self>
    where
        T: FromValue,
        U: Into<Value>,
    {
        if let Some(values) = self.typed_transform(field, f)? {
            self.fields.insert(target.into(), values);
        }
        Ok(self)
    }

    /// Collapse `field` into a single text value with no separator.
    pub fn join_values_of(&mut self, field: &str) -> &mut Self {
        self.join_values_with(field, "", "", "")
    }

    /// Collapse `field` into `prefix + v1 + separator + v2 ... + suffix`.
    ///
    /// Single-valued fields are joined too, so the result always carries the
    /// prefix and suffix.
    pub fn join_values_with(
        &mut self,
        field: &str,
        separator: &str,
        prefix: &str,
        suffix: &str,
    ) -> &mut Self {
        match self.fields.get_mut(field) {
            Some(values) => {
                let joined = format!("{prefix}{}{suffix}", values.texts().join(separator));
                *values = FieldValues::single(Value::Text(joined));
            }
            None => trace!(field, "join skipped: field absent"),
        }
        self
    }

    /// Split the first value of `field` on `separator`.
    ///
    /// The pieces replace the first value; any further values follow them
    /// unchanged. Empty pieces are dropped, and a field left with nothing is
    /// removed.
    pub fn split_values(&mut self, field: &str, separator: &str) -> &mut Self {
        let Some(values) = self.fields.get(field) else {
            trace!(field, "split skipped: field absent");
            return self;
        };
        let first = values.first().to_text();
        let split: Vec<Value> = first
            .split(separator)
            .filter(|piece| !piece.is_empty())
            .map(Value::from)
            .chain(values.iter().skip(1).cloned())
            .collect();
        match FieldValues::from_values(split) {
            Some(split) => {
                self.fields.insert(field.to_string(), split);
            }
            None => {
                self.fields.shift_remove(field);
            }
        }
        self
    }

    fn apply_in_place(&mut self, field: &str, transformer: &impl ValueTransformer) {
        match self.fields.get_mut(field) {
            Some(values) => *values = values.map(|value| transformer.transform(value)),
            None => trace!(field, "apply skipped: field absent"),
        }
    }

    fn typed_transform<T, U>(&self, field: &str, f: impl Fn(T) -> U) -> Result<Option<FieldValues>>
    where
        T: FromValue,
        U: Into<Value>,
    {
        let Some(values) = self.fields.get(field) else {
            trace!(field, "typed apply skipped: field absent");
            return Ok(None);
        };
        let transformed = values
            .iter()
            .map(|value| extract::<T>(field, value).map(|typed| f(typed).into()))
            .collect::<Result<Vec<Value>>>()?;
        Ok(FieldValues::from_values(transformed))
    }
}
