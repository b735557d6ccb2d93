//! specdoc CLI - read reflected test metadata and doc-comment XML, write
//! the specification sheet as CSV.
//!
//! Both inputs are loaded fully before any row is built; the sheet is
//! written only after all rows are built. A missing or malformed input
//! aborts the run with no partial output.

use anyhow::{Context, Result};
use clap::Parser;
use specdoc::classify::{Classifier, DEFAULT_MARKER_PREFIXES};
use specdoc::collect::collect_specs;
use specdoc::docs::DocIndex;
use specdoc::model::ModuleMetadata;
use specdoc::render::render_csv;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "specdoc",
    about = "Collect test-case specifications into a CSV review sheet"
)]
struct Cli {
    /// Reflected test metadata (JSON dump of declared types and methods)
    #[arg(short = 't', long)]
    types: PathBuf,

    /// Documentation XML with member doc comments
    #[arg(short = 'd', long)]
    docs: PathBuf,

    /// Output CSV path
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Additional recognized marker-name prefix (repeatable)
    #[arg(long = "marker-prefix")]
    marker_prefixes: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let metadata = fs::read_to_string(&cli.types)
        .with_context(|| format!("failed to read {}", cli.types.display()))?;
    let metadata: ModuleMetadata = serde_json::from_str(&metadata)
        .with_context(|| format!("invalid metadata JSON: {}", cli.types.display()))?;

    let xml = fs::read_to_string(&cli.docs)
        .with_context(|| format!("failed to read {}", cli.docs.display()))?;
    let index = DocIndex::parse(&xml)
        .with_context(|| format!("invalid documentation XML: {}", cli.docs.display()))?;

    let mut prefixes: Vec<String> = DEFAULT_MARKER_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect();
    prefixes.extend(cli.marker_prefixes);
    let classifier = Classifier::with_prefixes(prefixes);

    let specs = collect_specs(&metadata.types, &index, &classifier);
    let csv = render_csv(&specs);

    // BOM so spreadsheet tools detect UTF-8.
    fs::write(&cli.output, format!("\u{feff}{csv}"))
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("wrote {} test specs to {}", specs.len(), cli.output.display());
    Ok(())
}
