//! Library components for the recast command-line harness.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
pub mod recipe;
pub mod sink;
pub mod source;
