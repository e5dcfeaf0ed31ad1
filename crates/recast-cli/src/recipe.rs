//! Transformation recipes: ordered record operations loaded from TOML.
//!
//! ```toml
//! [[step]]
//! op = "rename"
//! from = "age"
//! to = "weight"
//!
//! [[step]]
//! op = "apply"
//! field = "weight"
//! transform = { scale = 2.2 }
//!
//! [[step]]
//! op = "join"
//! field = "text"
//! separator = " "
//! ```

use std::path::{Path, PathBuf};

use recast_core::{FieldPattern, Record, Value, ValueTransformer};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a recipe.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("failed to read recipe {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid recipe: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An ordered list of record operations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// A single record operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Rename {
        from: String,
        to: String,
    },
    /// Rename matching fields with a regex replacement template (`$1`).
    RenameMatching {
        pattern: FieldPattern,
        replacement: String,
    },
    Copy {
        from: String,
        to: String,
    },
    Remove {
        fields: Vec<String>,
    },
    RemoveMatching {
        pattern: FieldPattern,
    },
    Apply {
        field: String,
        transform: Transform,
        #[serde(default)]
        target: Option<String>,
    },
    ApplyMatching {
        pattern: FieldPattern,
        transform: Transform,
    },
    Join {
        field: String,
        #[serde(default)]
        separator: String,
        #[serde(default)]
        prefix: String,
        #[serde(default)]
        suffix: String,
    },
    Split {
        field: String,
        separator: String,
    },
}

/// Built-in value transforms available to recipes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Uppercase text values; other values pass through.
    Uppercase,
    Lowercase,
    Trim,
    /// Multiply numeric values; integers become floats.
    Scale(f64),
    /// Prepend to the text projection.
    Prefix(String),
    /// Append to the text projection.
    Suffix(String),
}

impl ValueTransformer for Transform {
    fn transform(&self, value: &Value) -> Value {
        match (self, value) {
            (Transform::Uppercase, Value::Text(text)) => Value::Text(text.to_uppercase()),
            (Transform::Lowercase, Value::Text(text)) => Value::Text(text.to_lowercase()),
            (Transform::Trim, Value::Text(text)) => Value::Text(text.trim().to_string()),
            (Transform::Scale(factor), Value::Int(int)) => Value::Float(*int as f64 * factor),
            (Transform::Scale(factor), Value::Float(float)) => Value::Float(float * factor),
            (Transform::Prefix(prefix), value) => Value::Text(format!("{prefix}{value}")),
            (Transform::Suffix(suffix), value) => Value::Text(format!("{value}{suffix}")),
            (_, value) => value.clone(),
        }
    }
}

impl Recipe {
    /// Parse a recipe from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RecipeError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a recipe file.
    pub fn load(path: &Path) -> Result<Self, RecipeError> {
        let text = std::fs::read_to_string(path).map_err(|source| RecipeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step, in order, against `record`.
    pub fn run(&self, record: &mut Record) {
        for (index, step) in self.steps.iter().enumerate() {
            debug!(step = index, op = step.name(), "running recipe step");
            step.run(record);
        }
    }
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Rename { .. } => "rename",
            Step::RenameMatching { .. } => "rename_matching",
            Step::Copy { .. } => "copy",
            Step::Remove { .. } => "remove",
            Step::RemoveMatching { .. } => "remove_matching",
            Step::Apply { .. } => "apply",
            Step::ApplyMatching { .. } => "apply_matching",
            Step::Join { .. } => "join",
            Step::Split { .. } => "split",
        }
    }

    pub fn run(&self, record: &mut Record) {
        match self {
            Step::Rename { from, to } => {
                record.rename(from, to.as_str());
            }
            Step::RenameMatching {
                pattern,
                replacement,
            } => {
                record.rename_matching(pattern, |name| pattern.replace(name, replacement));
            }
            Step::Copy { from, to } => {
                record.copy(from, to.as_str());
            }
            Step::Remove { fields } => {
                record.remove_all(fields);
            }
            Step::RemoveMatching { pattern } => {
                record.remove_matching(pattern);
            }
            Step::Apply {
                field,
                transform,
                target: Some(target),
            } => {
                record.apply_to(field, transform.clone(), target.as_str());
            }
            Step::Apply {
                field,
                transform,
                target: None,
            } => {
                record.apply(field, transform.clone());
            }
            Step::ApplyMatching { pattern, transform } => {
                record.apply_matching(pattern, transform.clone());
            }
            Step::Join {
                field,
                separator,
                prefix,
                suffix,
            } => {
                record.join_values_with(field, separator, prefix, suffix);
            }
            Step::Split { field, separator } => {
                record.split_values(field, separator);
            }
        }
    }
}
