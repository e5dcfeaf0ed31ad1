//! Field name patterns for bulk operations.

use std::fmt;
use std::str::FromStr;

use recast_model::{RecordError, Result};
use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};

/// Regular expression matched against whole field names.
///
/// The pattern is anchored on both ends, so `field.*` matches `field2` while
/// `eld` matches nothing.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    source: String,
    regex: Regex,
}

impl FieldPattern {
    /// Compile a field pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidPattern`] when `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| RecordError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Rewrite `name` with a replacement template (`$1`, `${name}`).
    ///
    /// Names that do not match are returned unchanged.
    pub fn replace(&self, name: &str, replacement: &str) -> String {
        self.regex.replace(name, replacement).into_owned()
    }
}

impl fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for FieldPattern {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for FieldPattern {
    type Error = RecordError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for FieldPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(&source).map_err(de::Error::custom)
    }
}
