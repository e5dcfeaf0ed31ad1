use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use recast_cli::pipeline::{RunSummary, process, profile};
use recast_cli::recipe::Recipe;
use recast_cli::sink::{Projection, ProjectionWriter};
use recast_cli::source::RecordReader;

use crate::cli::{ApplyArgs, InspectArgs, ProjectionArg};
use crate::summary::print_profile;

pub fn run_apply(args: &ApplyArgs) -> Result<RunSummary> {
    let span = info_span!("apply", input = %args.input.display());
    let _guard = span.enter();
    let recipe = load_recipe(args.recipe.as_deref())?;
    let reader = RecordReader::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = ProjectionWriter::new(BufWriter::new(output), projection(args.projection));
    let summary = process(reader, &recipe, &mut writer, args.limit)
        .with_context(|| format!("process {}", args.input.display()))?;
    writer.finish().context("flush output")?;
    info!(
        read = summary.read,
        written = summary.written,
        emptied = summary.emptied,
        "apply finished"
    );
    Ok(summary)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();
    let recipe = load_recipe(args.recipe.as_deref())?;
    let reader = RecordReader::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let (fields, first) = profile(reader, &recipe, args.limit)
        .with_context(|| format!("profile {}", args.input.display()))?;
    info!(fields = fields.len(), "inspect finished");
    print_profile(&args.input.display().to_string(), &fields, first.as_ref());
    Ok(())
}

fn load_recipe(path: Option<&Path>) -> Result<Recipe> {
    let Some(path) = path else {
        return Ok(Recipe::default());
    };
    let recipe = Recipe::load(path).with_context(|| format!("load recipe {}", path.display()))?;
    info!(steps = recipe.steps.len(), recipe = %path.display(), "recipe loaded");
    Ok(recipe)
}

fn projection(arg: ProjectionArg) -> Projection {
    match arg {
        ProjectionArg::Map => Projection::Map,
        ProjectionArg::Single => Projection::Single,
        ProjectionArg::String => Projection::String,
        ProjectionArg::Raw => Projection::Raw,
    }
}
