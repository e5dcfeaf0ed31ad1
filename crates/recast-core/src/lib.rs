//! Multi-valued field records for extract/transform pipelines.
//!
//! A [`Record`] is an ordered mapping from field name to one or more typed
//! values. It is built up with fluent mutations, reshaped with rename, copy,
//! remove, transform, join, and split operations (literal or pattern-based),
//! and finally projected into flat maps for a downstream writer.
//!
//! # Example
//!
//! ```
//! use recast_core::Record;
//!
//! let mut record = Record::new();
//! record
//!     .add("age", 90)
//!     .add("name", "rob")
//!     .add("text", "first phrase")
//!     .add("text", "second phrase")
//!     .rename("age", "years")
//!     .join_values_with("text", " / ", "", "");
//!
//! assert_eq!(record.value_of("text").unwrap(), "first phrase / second phrase");
//! assert_eq!(record.to_string(), "{years=[90], name=[rob], text=[first phrase / second phrase]}");
//! ```
//!
//! # Error model
//!
//! Reads (`value_of`, `raw_value_of`, `size_of`, ...) fail with
//! [`RecordError::FieldNotFound`] or [`RecordError::TypeMismatch`]. Mutations
//! on absent fields are silent no-ops, so records can be reshaped
//! speculatively.

mod field;
mod pattern;
mod projection;
mod record;
mod transform;

pub use field::FieldValues;
pub use pattern::FieldPattern;
pub use projection::MapValue;
pub use record::Record;
pub use transform::ValueTransformer;

pub use recast_model::{FromValue, IntoValues, RecordError, Result, Value};
