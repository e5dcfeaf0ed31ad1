//! Read, reshape, and write records.

use std::io::{self, Write};

use indexmap::IndexMap;
use recast_core::Record;
use thiserror::Error;
use tracing::{Level, debug, trace, warn};

use crate::logging::redact_value;
use crate::recipe::Recipe;
use crate::sink::ProjectionWriter;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("record {index}: {source}")]
    Source {
        index: usize,
        #[source]
        source: SourceError,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub read: usize,
    pub written: usize,
    /// Records left with no fields after the recipe ran.
    pub emptied: usize,
}

/// Per-field statistics gathered by [`profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProfile {
    pub name: String,
    /// Number of records carrying the field.
    pub records: usize,
    /// Largest value count seen for the field.
    pub max_values: usize,
}

/// Run `recipe` over each record and write the projection.
///
/// Stops at the first unreadable record. `limit` caps the records read.
pub fn process<I, W>(
    records: I,
    recipe: &Recipe,
    writer: &mut ProjectionWriter<W>,
    limit: Option<usize>,
) -> Result<RunSummary, PipelineError>
where
    I: IntoIterator<Item = Result<Record, SourceError>>,
    W: Write,
{
    let mut summary = RunSummary::default();
    for (index, record) in records
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
    {
        let mut record = record.map_err(|source| PipelineError::Source { index, source })?;
        summary.read += 1;
        recipe.run(&mut record);
        if tracing::enabled!(Level::TRACE) {
            let rendered = record.to_string();
            trace!(index, record = redact_value(&rendered), "reshaped record");
        }
        if record.is_empty() {
            summary.emptied += 1;
            warn!(index, "record has no fields after recipe");
        }
        writer.write_record(&record)?;
    }
    summary.written = writer.written();
    debug!(read = summary.read, written = summary.written, "run complete");
    Ok(summary)
}

/// Profile field usage across records, after running `recipe` on each.
///
/// Returns the profile in first-seen field order and the first reshaped record.
pub fn profile<I>(
    records: I,
    recipe: &Recipe,
    limit: Option<usize>,
) -> Result<(Vec<FieldProfile>, Option<Record>), PipelineError>
where
    I: IntoIterator<Item = Result<Record, SourceError>>,
{
    let mut fields: IndexMap<String, FieldProfile> = IndexMap::new();
    let mut first = None;
    for (index, record) in records
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
    {
        let mut record = record.map_err(|source| PipelineError::Source { index, source })?;
        recipe.run(&mut record);
        for (name, values) in record.iter() {
            let entry = fields
                .entry(name.to_string())
                .or_insert_with(|| FieldProfile {
                    name: name.to_string(),
                    records: 0,
                    max_values: 0,
                });
            entry.records += 1;
            entry.max_values = entry.max_values.max(values.len());
        }
        if first.is_none() {
            first = Some(record);
        }
    }
    Ok((fields.into_values().collect(), first))
}
