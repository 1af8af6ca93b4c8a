use std::path::PathBuf;

use anyhow::Context;
use calc_cli::{commands, logging};
use calc_core::CalculationEngine;
use clap::{Parser, Subcommand};
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Reference calculators for finance, health, math, science and everyday
/// estimates.
///
/// Browse the catalog, inspect a calculator's inputs, and run single
/// calculations or whole CSV batches.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
struct Cli {
    /// Log filter: a level (`debug`) or EnvFilter directives.
    /// Overrides `RUST_LOG`; defaults to `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the calculator categories.
    Categories,

    /// List calculators.
    List {
        /// Only this category (e.g. `financial`).
        #[arg(long)]
        category: Option<String>,

        /// Only the calculators featured on the home page.
        #[arg(long)]
        popular: bool,
    },

    /// Show a calculator's input fields.
    Show {
        id: String,

        /// Print the definition as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run one calculation.
    Run {
        id: String,

        /// Input values as `name=value`.
        pairs: Vec<String>,

        /// Read input values from a flat TOML table.
        #[arg(long)]
        inputs: Option<PathBuf>,

        /// Start from the calculator's pre-filled values.
        #[arg(long)]
        defaults: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run every request in a CSV file.
    Batch {
        file: PathBuf,

        /// Print the results as JSON.
        #[arg(long)]
        json: bool,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    debug!(command = ?cli.command, "starting");

    let output = match cli.command {
        Command::Categories => commands::categories(),
        Command::List { category, popular } => commands::list(category.as_deref(), popular)?,
        Command::Show { id, json } => commands::show(&id, json)?,
        Command::Run {
            id,
            pairs,
            inputs,
            defaults,
            json,
        } => {
            let raw = commands::build_inputs(&id, &pairs, inputs.as_deref(), defaults)
                .with_context(|| format!("Failed to read inputs for '{id}'"))?;
            commands::run(&CalculationEngine::new(), &id, &raw, json)?
        }
        Command::Batch { file, json } => commands::batch(&CalculationEngine::new(), &file, json)?,
    };

    println!("{output}");

    Ok(())
}
