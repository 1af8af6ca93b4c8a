use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_core::CalculationEngine;
use calc_data::BatchLoader;
use clap::Parser;

/// Run a batch of calculations from a CSV file and write the results as CSV.
///
/// The input file needs a `calculator` column holding calculator ids (for
/// example `tip` or `mortgage`); every other column is an input field name.
/// Leave a cell empty to use the engine's default for that field.
///
/// The output has the columns `row`, `calculator`, `result`, `unit` and
/// `details`.
#[derive(Parser, Debug)]
#[command(name = "calc-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing calculation requests
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the results (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("Loading requests from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let requests = BatchLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    eprintln!("Parsed {} requests from CSV", requests.len());

    let engine = CalculationEngine::new();
    let outcomes = BatchLoader::run(&engine, &requests);

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["row", "calculator", "result", "unit", "details"])?;
    for outcome in &outcomes {
        writer
            .write_record([
                outcome.row.to_string().as_str(),
                outcome.calculator.as_str(),
                outcome.result.result.as_str(),
                outcome.result.unit.as_str(),
                outcome.result.details.as_str(),
            ])
            .context("Failed to write results")?;
    }
    writer.flush().context("Failed to write results")?;

    eprintln!("Wrote {} results.", outcomes.len());

    Ok(())
}
