//! Projection output: one JSON object per record.

use std::io::{self, Write};

use recast_core::Record;

/// Which flat map shape to hand to the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    /// Bare values for single-valued fields, arrays for multi-valued ones.
    #[default]
    Map,
    /// First value of every field, raw type kept.
    Single,
    /// First value of every field as text.
    String,
    /// Every field as an array.
    Raw,
}

impl Projection {
    /// Project `record` into a JSON value.
    pub fn project(self, record: &Record) -> serde_json::Result<serde_json::Value> {
        match self {
            Projection::Map => serde_json::to_value(record.as_map()),
            Projection::Single => serde_json::to_value(record.as_single_level_map()),
            Projection::String => serde_json::to_value(record.as_single_level_string_map()),
            Projection::Raw => serde_json::to_value(record.as_raw_map()),
        }
    }
}

/// Writes projected records as JSON lines.
pub struct ProjectionWriter<W: Write> {
    writer: W,
    projection: Projection,
    written: usize,
}

impl<W: Write> ProjectionWriter<W> {
    pub fn new(writer: W, projection: Projection) -> Self {
        Self {
            writer,
            projection,
            written: 0,
        }
    }

    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        let json = self.projection.project(record)?;
        serde_json::to_writer(&mut self.writer, &json)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
