//! Value and error model shared by the recast crates.
//!
//! A record field stores one or more [`Value`]s. Values keep their original
//! type until a caller asks for their text projection, and typed reads go
//! through [`FromValue`] so that a wrong type surfaces as
//! [`RecordError::TypeMismatch`] instead of being coerced.

pub mod error;
pub mod value;

pub use error::{RecordError, Result};
pub use value::{FromValue, IntoValues, Value};
