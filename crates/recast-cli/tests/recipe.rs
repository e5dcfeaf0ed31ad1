//! Integration tests for TOML recipes.

use recast_cli::recipe::{Recipe, Step, Transform};
use recast_core::{Record, Value};

fn sample() -> Record {
    let mut record = Record::new();
    record
        .add("text", ["the text", "another text"])
        .add("age", 10)
        .add("a_name", "rob")
        .add("a_city", "lyon");
    record
}

#[test]
fn parses_every_step_kind() {
    let recipe = Recipe::from_toml_str(
        r#"
        [[step]]
        op = "rename"
        from = "age"
        to = "weight"

        [[step]]
        op = "rename_matching"
        pattern = "a_(.*)"
        replacement = "$1"

        [[step]]
        op = "copy"
        from = "name"
        to = "alias"

        [[step]]
        op = "remove"
        fields = ["city"]

        [[step]]
        op = "remove_matching"
        pattern = "tmp_.*"

        [[step]]
        op = "apply"
        field = "weight"
        transform = { scale = 2.2 }

        [[step]]
        op = "apply_matching"
        pattern = "name|alias"
        transform = "uppercase"

        [[step]]
        op = "join"
        field = "text"
        separator = " / "

        [[step]]
        op = "split"
        field = "alias"
        separator = "O"
        "#,
    )
    .unwrap();

    let names: Vec<&str> = recipe.steps.iter().map(Step::name).collect();
    assert_eq!(
        names,
        [
            "rename",
            "rename_matching",
            "copy",
            "remove",
            "remove_matching",
            "apply",
            "apply_matching",
            "join",
            "split"
        ]
    );
    assert!(matches!(
        &recipe.steps[5],
        Step::Apply { transform: Transform::Scale(factor), target: None, .. } if *factor == 2.2
    ));
}

#[test]
fn runs_steps_in_order() {
    let recipe = Recipe::from_toml_str(
        r#"
        [[step]]
        op = "rename"
        from = "age"
        to = "weight"

        [[step]]
        op = "apply"
        field = "weight"
        transform = { scale = 2.0 }

        [[step]]
        op = "rename_matching"
        pattern = "a_(.*)"
        replacement = "$1"

        [[step]]
        op = "join"
        field = "text"
        separator = ", "
        prefix = "<"
        suffix = ">"
        "#,
    )
    .unwrap();

    let mut record = sample();
    recipe.run(&mut record);

    assert_eq!(record.fields(), ["text", "weight", "name", "city"]);
    assert_eq!(record.raw_value_of::<f64>("weight").unwrap(), 20.0);
    assert_eq!(
        record.value_of("text").unwrap(),
        "<the text, another text>"
    );
}

#[test]
fn apply_with_target_keeps_source() {
    let recipe = Recipe::from_toml_str(
        r#"
        [[step]]
        op = "apply"
        field = "a_name"
        target = "shout"
        transform = "uppercase"
        "#,
    )
    .unwrap();

    let mut record = sample();
    recipe.run(&mut record);

    assert_eq!(record.value_of("a_name").unwrap(), "rob");
    assert_eq!(record.value_of("shout").unwrap(), "ROB");
}

#[test]
fn split_and_remove_steps() {
    let recipe = Recipe::from_toml_str(
        r#"
        [[step]]
        op = "split"
        field = "a_city"
        separator = "y"

        [[step]]
        op = "remove_matching"
        pattern = "text|age"
        "#,
    )
    .unwrap();

    let mut record = sample();
    recipe.run(&mut record);

    assert_eq!(record.fields(), ["a_name", "a_city"]);
    assert_eq!(record.values_of("a_city").unwrap(), ["l", "on"]);
}

#[test]
fn steps_on_missing_fields_are_no_ops() {
    let recipe = Recipe::from_toml_str(
        r#"
        [[step]]
        op = "rename"
        from = "missing"
        to = "other"

        [[step]]
        op = "apply"
        field = "missing"
        transform = "trim"
        "#,
    )
    .unwrap();

    let mut record = sample();
    let before = record.clone();
    recipe.run(&mut record);
    assert_eq!(record, before);
}

#[test]
fn prefix_and_suffix_render_any_value() {
    let mut record = Record::new();
    record.add("n", 7);
    Step::Apply {
        field: "n".into(),
        transform: Transform::Prefix("#".into()),
        target: None,
    }
    .run(&mut record);
    assert_eq!(record.raw_value_of::<Value>("n").unwrap(), Value::from("#7"));
}

#[test]
fn rejects_unknown_ops_and_bad_patterns() {
    assert!(Recipe::from_toml_str("[[step]]\nop = \"explode\"\n").is_err());
    assert!(
        Recipe::from_toml_str("[[step]]\nop = \"remove_matching\"\npattern = \"(\"\n").is_err()
    );
    assert!(Recipe::from_toml_str("steps = []\n").is_err());
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipe.toml");
    std::fs::write(&path, "[[step]]\nop = \"remove\"\nfields = [\"age\"]\n").unwrap();

    let recipe = Recipe::load(&path).unwrap();
    assert_eq!(recipe.steps.len(), 1);

    let missing = Recipe::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(missing.to_string().contains("missing.toml"));
}
