//! Tests for value transformation, join, and split.

use recast_core::{FieldPattern, Record, RecordError, Value, ValueTransformer};

fn uppercase(value: &Value) -> Value {
    Value::from(value.to_text().to_uppercase())
}

struct Scale(f64);

impl ValueTransformer for Scale {
    fn transform(&self, value: &Value) -> Value {
        match value {
            Value::Int(i) => Value::Float(*i as f64 * self.0),
            Value::Float(f) => Value::Float(f * self.0),
            other => other.clone(),
        }
    }
}

#[test]
fn apply_function_to_all_field_values() {
    let mut record = Record::new();
    record.add("field", "value").add("field", "value2");

    record.apply("field", uppercase);

    assert_eq!(record.values_of("field").unwrap(), vec!["VALUE", "VALUE2"]);
}

#[test]
fn apply_closure_to_field() {
    let mut record = Record::new();
    record.add("n", 1).add("n", 2);

    record.apply("n", |value: &Value| Value::from(value.as_int().unwrap_or(0) + 1));

    assert_eq!(record.raw_values_of::<i64>("n").unwrap(), vec![2, 3]);
}

#[test]
fn apply_function_to_all_fields_matching_pattern() {
    let mut record = Record::new();
    record
        .add("firstField", "value")
        .add("secondField", "value2")
        .add("other", "value3");

    record.apply_matching(&FieldPattern::new(".*Field").unwrap(), uppercase);

    assert_eq!(record.values_of("firstField").unwrap(), vec!["VALUE"]);
    assert_eq!(record.values_of("secondField").unwrap(), vec!["VALUE2"]);
    assert_eq!(record.values_of("other").unwrap(), vec!["value3"]);
}

#[test]
fn apply_function_and_store_on_another_field() {
    let mut record = Record::new();
    record.add("field", "value").add("field", "value2");

    record.apply_to("field", uppercase, "to");

    assert_eq!(record.values_of("field").unwrap(), vec!["value", "value2"]);
    assert_eq!(record.values_of("to").unwrap(), vec!["VALUE", "VALUE2"]);
}

#[test]
fn apply_to_overwrites_target() {
    let mut record = Record::new();
    record.add("field", "a").add("to", "old1").add("to", "old2");

    record.apply_to("field", uppercase, "to");

    assert_eq!(record.values_of("to").unwrap(), vec!["A"]);
}

#[test]
fn apply_on_missing_field_is_noop() {
    let mut record = Record::new();
    record.add("a", 1).apply("missing", uppercase).apply_to("missing", uppercase, "b");
    assert_eq!(record.fields(), vec!["a"]);
}

#[test]
fn custom_transformer() {
    let mut record = Record::new();
    record.add("weight", 90);

    record.apply("weight", Scale(2.0));

    assert_eq!(record.raw_value_of::<f64>("weight").unwrap(), 180.0);
    assert_eq!(record.value_of("weight").unwrap(), "180.0");
}

#[test]
fn typed_apply() {
    let mut record = Record::new();
    record.add("name", "rob").add("age", 90);

    record
        .apply_as("name", |name: String| name.to_uppercase())
        .unwrap()
        .apply_as("age", |age: i64| age as f64 * 2.2)
        .unwrap();

    assert_eq!(record.value_of("name").unwrap(), "ROB");
    assert!((record.raw_value_of::<f64>("age").unwrap() - 198.0).abs() < 1e-9);
}

#[test]
fn typed_apply_to_target() {
    let mut record = Record::new();
    record.add("age", 30);

    record
        .apply_as_to("age", |age: i64| age >= 18, "adult")
        .unwrap();

    assert_eq!(record.raw_value_of::<i64>("age").unwrap(), 30);
    assert!(record.raw_value_of::<bool>("adult").unwrap());
}

#[test]
fn typed_apply_mismatch_leaves_record_unchanged() {
    let mut record = Record::new();
    record.add("mixed", 1).add("mixed", "two");
    let before = record.clone();

    let err = record
        .apply_as("mixed", |n: i64| n + 1)
        .map(|_| ())
        .unwrap_err();

    assert!(matches!(err, RecordError::TypeMismatch { found: "text", .. }));
    assert_eq!(record, before);
}

#[test]
fn typed_apply_on_missing_field_is_noop() {
    let mut record = Record::new();
    record.apply_as("missing", |n: i64| n + 1).unwrap();
    assert!(record.is_empty());
}

#[test]
fn join_field_values() {
    let mut record = Record::new();
    record
        .add("field", "value1")
        .add("field", "value2")
        .add("field", "value3")
        .add("field", "value4")
        .join_values_with("field", "\n", "VALUES\n", "\nEND");

    assert!(record.is_single_value("field").unwrap());
    assert_eq!(
        record.value_of("field").unwrap(),
        "VALUES\nvalue1\nvalue2\nvalue3\nvalue4\nEND"
    );
}

#[test]
fn join_without_separator() {
    let mut record = Record::new();
    record.add("text", "a").add("text", 1).add("text", true);
    record.join_values_of("text");
    assert_eq!(record.value_of("text").unwrap(), "a1true");
}

#[test]
fn join_single_value_applies_prefix_and_suffix() {
    let mut record = Record::new();
    record.add("f", "only").join_values_with("f", ",", "[", "]");
    assert_eq!(record.value_of("f").unwrap(), "[only]");
}

#[test]
fn split_field_value() {
    let mut record = Record::new();
    record
        .add("field", "value1 value2 value3 value4")
        .split_values("field", " ");

    assert!(record.is_multi_value("field").unwrap());
    assert_eq!(
        record.values_of("field").unwrap(),
        vec!["value1", "value2", "value3", "value4"]
    );
}

#[test]
fn split_on_missing_field_is_noop() {
    let mut record = Record::new();
    record.split_values("missing", ",").join_values_of("missing");
    assert!(record.is_empty());
}

#[test]
fn split_then_join_restores_values() {
    let mut record = Record::new();
    record.add("f", "a").add("f", "b").add("f", "c");
    let before = record.clone();

    record.join_values_with("f", "|", "", "").split_values("f", "|");

    assert_eq!(record, before);
}

#[test]
fn article_pipeline() {
    let mut record = Record::new();
    record
        .add("age", 90)
        .add("name", "rob")
        .add("text", "first phrase")
        .add("text", "second phrase")
        .add("text", "third phrase")
        .add("text", "fourth phrase")
        .rename("age", "weight")
        .apply("weight", Scale(2.2))
        .apply("name", uppercase)
        .join_values_of("text");

    assert_eq!(record.value_of("name").unwrap(), "ROB");
    assert_eq!(
        record.value_of("text").unwrap(),
        "first phrasesecond phrasethird phrasefourth phrase"
    );
    assert!(record.raw_value_of::<f64>("weight").is_ok());
    assert_eq!(record.fields(), vec!["weight", "name", "text"]);
}
