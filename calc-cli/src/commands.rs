//! Subcommand handlers. Each returns the text to print so the binary stays a
//! thin dispatcher.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use calc_core::catalog::{self, calculators_in, find_calculator, list_categories};
use calc_core::{CalculationEngine, CalculatorDefinition, CategoryId, EngineContext, InputKind, RawInputs};
use calc_data::{BatchLoader, load_inputs_toml};
use tracing::{debug, warn};

use crate::render;

// ─── catalog ─────────────────────────────────────────────────────────────────

/// Every category with its calculator count.
pub fn categories() -> String {
    list_categories()
        .iter()
        .map(|c| {
            format!(
                "{:<12}  {:<14}  {:>2} calculators  {}",
                c.id.as_str(),
                c.name,
                calculators_in(c.id).count(),
                c.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Calculator ids and names, optionally narrowed to one category and/or the
/// popular set. Popular calculators are starred.
pub fn list(
    category: Option<&str>,
    popular_only: bool,
) -> Result<String> {
    let category = category.map(parse_category).transpose()?;

    let lines: Vec<String> = catalog::list_calculators()
        .iter()
        .filter(|c| category.is_none_or(|id| c.category_id == id))
        .filter(|c| !popular_only || c.popular)
        .map(|c| format!("{:<20}  {}{}", c.id, c.name, if c.popular { " *" } else { "" }))
        .collect();

    Ok(lines.join("\n"))
}

fn parse_category(id: &str) -> Result<CategoryId> {
    CategoryId::parse(id).ok_or_else(|| {
        let known: Vec<&str> = CategoryId::ALL.iter().map(CategoryId::as_str).collect();
        anyhow!("unknown category '{id}' (expected one of: {})", known.join(", "))
    })
}

fn lookup(id: &str) -> Result<&'static CalculatorDefinition> {
    find_calculator(id).ok_or_else(|| anyhow!("unknown calculator '{id}'"))
}

/// The input form of one calculator.
pub fn show(
    id: &str,
    json: bool,
) -> Result<String> {
    let definition = lookup(id)?;

    if json {
        return serde_json::to_string_pretty(definition).context("Failed to encode calculator");
    }

    let category = catalog::category(definition.category_id);
    let mut lines = vec![
        format!("{} ({})", definition.name, definition.id),
        format!("{}: {}", category.name, definition.description),
        String::new(),
    ];

    let width = definition.inputs.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in definition.inputs {
        let mut line = format!("  {:<width$}  {}", field.name, field.label);
        if let Some(unit) = field.unit {
            line.push_str(&format!(" [{unit}]"));
        }
        match field.kind {
            InputKind::Select => line.push_str(&format!("  one of: {}", field.options.join(" | "))),
            InputKind::Text => line.push_str("  (text)"),
            InputKind::Number => {}
        }
        if let Some(default) = field.default_value {
            line.push_str(&format!("  default {default}"));
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

// ─── run ─────────────────────────────────────────────────────────────────────

/// Splits a `name=value` argument. The value may itself contain `=`.
pub fn parse_pair(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => bail!("expected name=value, got '{arg}'"),
    }
}

/// Assembles the raw inputs for `id`.
///
/// Later sources override earlier ones: catalog defaults (when `defaults`
/// is set), then the TOML file, then the `name=value` pairs.
pub fn build_inputs(
    id: &str,
    pairs: &[String],
    toml_file: Option<&Path>,
    defaults: bool,
) -> Result<RawInputs> {
    let mut inputs = RawInputs::new();

    if defaults {
        match find_calculator(id) {
            Some(definition) => inputs.merge(definition.default_inputs()),
            None => warn!(calculator = id, "no catalog entry, no defaults applied"),
        }
    }

    if let Some(path) = toml_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        let from_file = load_inputs_toml(&text)
            .with_context(|| format!("Failed to parse TOML: {}", path.display()))?;
        inputs.merge(from_file);
    }

    for pair in pairs {
        let (name, value) = parse_pair(pair)?;
        inputs.insert(name, value);
    }

    debug!(calculator = id, fields = inputs.len(), "inputs assembled");
    Ok(inputs)
}

/// Runs one calculation and renders it as text or JSON.
pub fn run<C: EngineContext>(
    engine: &CalculationEngine<C>,
    id: &str,
    inputs: &RawInputs,
    json: bool,
) -> Result<String> {
    let result = engine.calculate(id, inputs);

    if json {
        return serde_json::to_string_pretty(&result).context("Failed to encode result");
    }

    let text = render::result_text(&result);
    Ok(match find_calculator(id) {
        Some(definition) => format!("{}\n\n{text}", definition.name),
        None => text,
    })
}

// ─── batch ───────────────────────────────────────────────────────────────────

/// Runs every request in a batch CSV file.
pub fn batch<C: EngineContext>(
    engine: &CalculationEngine<C>,
    path: &Path,
    json: bool,
) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let requests = BatchLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;

    let outcomes = BatchLoader::run(engine, &requests);

    if json {
        serde_json::to_string_pretty(&outcomes).context("Failed to encode results")
    } else {
        Ok(render::batch_table(&outcomes))
    }
}
