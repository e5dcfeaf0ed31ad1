//! CLI argument definitions for recast.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "recast",
    version,
    about = "Reshape CSV and JSON-lines rows as multi-valued records",
    long_about = "Load each input row as a record, run an optional TOML recipe of\n\
                  rename, copy, remove, apply, join, and split steps, then emit\n\
                  one projected JSON object per record."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reshape every record and write projected JSON lines.
    Apply(ApplyArgs),

    /// Summarize the fields records carry after reshaping.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Input file (.csv, .jsonl, or .ndjson).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML recipe to run against each record.
    #[arg(long = "recipe", value_name = "PATH")]
    pub recipe: Option<PathBuf>,

    /// Map shape written for each record.
    #[arg(long = "projection", value_enum, default_value = "map")]
    pub projection: ProjectionArg,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Stop after this many records.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Input file (.csv, .jsonl, or .ndjson).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML recipe to run before profiling.
    #[arg(long = "recipe", value_name = "PATH")]
    pub recipe: Option<PathBuf>,

    /// Stop after this many records.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectionArg {
    Map,
    Single,
    String,
    Raw,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
