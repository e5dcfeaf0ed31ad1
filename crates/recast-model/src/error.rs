//! Error types for record retrieval and field patterns.

use thiserror::Error;

/// Errors raised by strict record operations.
///
/// Mutations on absent fields never produce an error; only reads that expect
/// a field (or a value of a particular type) do.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The requested field is not present in the record.
    #[error("field not found: {field}")]
    FieldNotFound { field: String },

    /// The stored value cannot be read as the requested type.
    #[error("type mismatch on field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A field name pattern failed to compile.
    #[error("invalid field pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl RecordError {
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;
