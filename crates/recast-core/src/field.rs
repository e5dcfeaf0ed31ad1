//! The value container held by a single record field.

use recast_model::Value;

/// Ordered, non-empty sequence of values belonging to one field.
///
/// Duplicates are kept and insertion order is preserved. The only way to
/// build one is [`FieldValues::from_values`], which rejects an empty vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues(Vec<Value>);

impl FieldValues {
    /// Wrap `values`, returning `None` when there is nothing to hold.
    pub fn from_values(values: Vec<Value>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self(values))
        }
    }

    pub fn single(value: Value) -> Self {
        Self(vec![value])
    }

    /// First value of the field.
    pub fn first(&self) -> &Value {
        // non-empty by construction
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    pub fn is_multi(&self) -> bool {
        self.0.len() > 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Text projection of every value, in order.
    pub fn texts(&self) -> Vec<String> {
        self.0.iter().map(Value::to_text).collect()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }

    pub(crate) fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.0.extend(values);
    }

    /// Map every value, keeping order and count.
    pub(crate) fn map(&self, f: impl FnMut(&Value) -> Value) -> Self {
        Self(self.0.iter().map(f).collect())
    }
}

impl<'a> IntoIterator for &'a FieldValues {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sequences() {
        assert!(FieldValues::from_values(Vec::new()).is_none());
    }

    #[test]
    fn cardinality_helpers() {
        let single = FieldValues::single(Value::from("a"));
        assert!(single.is_single());
        assert!(!single.is_multi());
        assert_eq!(single.len(), 1);

        let multi =
            FieldValues::from_values(vec![Value::from("a"), Value::from("a")]).unwrap();
        assert!(multi.is_multi());
        assert_eq!(multi.texts(), vec!["a", "a"]);
        assert_eq!(multi.first(), &Value::from("a"));
    }

    #[test]
    fn map_keeps_count() {
        let values = FieldValues::from_values(vec![Value::from(1), Value::from(2)]).unwrap();
        let doubled = values.map(|value| Value::from(value.as_int().unwrap_or_default() * 2));
        assert_eq!(doubled.as_slice(), &[Value::from(2), Value::from(4)]);
    }
}
