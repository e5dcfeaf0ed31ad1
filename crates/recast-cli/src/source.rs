//! Record sources: CSV files and JSON-lines files.
//!
//! CSV cells are loaded as text (the header row names the fields, empty cells
//! add nothing, and a row whose length differs from the header is an error).
//! JSON-lines objects keep their JSON scalar types.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use recast_core::Record;
use thiserror::Error;

/// Errors that can occur while reading records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported input format for {path} (expected .csv, .jsonl, or .ndjson)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line} is not a JSON object")]
    NotAnObject { line: usize },
}

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    JsonLines,
}

impl InputFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(InputFormat::Csv),
            "jsonl" | "ndjson" => Some(InputFormat::JsonLines),
            _ => None,
        }
    }
}

enum Rows {
    Csv {
        headers: Vec<String>,
        rows: csv::StringRecordsIntoIter<Box<dyn Read>>,
    },
    JsonLines {
        lines: std::io::Lines<BufReader<Box<dyn Read>>>,
        line: usize,
    },
}

/// Streaming iterator of records read from a CSV or JSON-lines input.
pub struct RecordReader {
    rows: Rows,
}

impl RecordReader {
    /// Open `path`, choosing the format from its extension.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let format = InputFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(Box::new(file), format)
    }

    /// Read records of `format` from any byte source.
    pub fn from_reader(reader: Box<dyn Read>, format: InputFormat) -> Result<Self, SourceError> {
        let rows = match format {
            InputFormat::Csv => {
                let mut csv_reader = csv::ReaderBuilder::new()
                    .has_headers(true)
                    .from_reader(reader);
                let headers = csv_reader
                    .headers()?
                    .iter()
                    .map(|header| header.trim_start_matches('\u{feff}').to_string())
                    .collect();
                Rows::Csv {
                    headers,
                    rows: csv_reader.into_records(),
                }
            }
            InputFormat::JsonLines => Rows::JsonLines {
                lines: BufReader::new(reader).lines(),
                line: 0,
            },
        };
        Ok(Self { rows })
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.rows {
            Rows::Csv { headers, rows } => {
                let row = match rows.next()? {
                    Ok(row) => row,
                    Err(error) => return Some(Err(error.into())),
                };
                let record: Record = headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, cell)| (header.as_str(), cell))
                    .collect();
                Some(Ok(record))
            }
            Rows::JsonLines { lines, line } => loop {
                *line += 1;
                let text = match lines.next()? {
                    Ok(text) => text,
                    Err(source) => return Some(Err(SourceError::Read { line: *line, source })),
                };
                if text.trim().is_empty() {
                    continue;
                }
                return Some(parse_json_line(&text, *line));
            },
        }
    }
}

fn parse_json_line(text: &str, line: usize) -> Result<Record, SourceError> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|source| SourceError::Json { line, source })?;
    let object = json.as_object().ok_or(SourceError::NotAnObject { line })?;
    let mut record = Record::new();
    record.load_json(object);
    Ok(record)
}
