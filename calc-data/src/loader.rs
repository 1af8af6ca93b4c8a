use std::io::Read;

use calc_core::{CalculationEngine, CalculationResult, EngineContext, RawInputs};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Header of the column naming the calculator each row runs.
pub const CALCULATOR_COLUMN: &str = "calculator";

/// Errors that can occur when loading batch requests or input files.
#[derive(Debug, Error)]
pub enum BatchLoadError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required '{CALCULATOR_COLUMN}' column")]
    MissingCalculatorColumn,

    #[error("empty calculator id on row {row}")]
    EmptyCalculatorId { row: usize },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported value for '{key}': expected a string, number or boolean")]
    UnsupportedValue { key: String },
}

/// One calculation read from a batch file.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    /// 1-based data row; the header is row 0.
    pub row: usize,
    pub calculator: String,
    pub inputs: RawInputs,
}

/// A request paired with what the engine produced for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub row: usize,
    pub calculator: String,
    pub result: CalculationResult,
}

/// Loader for batches of calculations stored as CSV.
///
/// The file must have a `calculator` column holding a calculator id. Every
/// other header names an input field; a row only supplies the fields whose
/// cells are non-empty, so blank cells fall back to the engine's default.
///
/// ```text
/// calculator,bill,percent,people,a,b,c
/// tip,100,20,4,,,
/// quadratic,,,,1,-3,2
/// ```
pub struct BatchLoader;

impl BatchLoader {
    /// Parse batch requests from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BatchRequest>, BatchLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let calculator_column = headers
            .iter()
            .position(|h| h == CALCULATOR_COLUMN)
            .ok_or(BatchLoadError::MissingCalculatorColumn)?;

        let mut requests = Vec::new();

        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = idx + 1;

            let calculator = record.get(calculator_column).unwrap_or_default();
            if calculator.is_empty() {
                return Err(BatchLoadError::EmptyCalculatorId { row });
            }

            let inputs: RawInputs = headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(column, (_, value))| *column != calculator_column && !value.is_empty())
                .map(|(_, (name, value))| (name, value))
                .collect();

            debug!(row, calculator, fields = inputs.len(), "parsed batch row");
            requests.push(BatchRequest {
                row,
                calculator: calculator.to_string(),
                inputs,
            });
        }

        Ok(requests)
    }

    /// Run every request through `engine`, keeping file order.
    ///
    /// The engine never fails, so neither does this: unknown ids and invalid
    /// inputs come back as their placeholder results.
    pub fn run<C: EngineContext>(
        engine: &CalculationEngine<C>,
        requests: &[BatchRequest],
    ) -> Vec<BatchOutcome> {
        info!(requests = requests.len(), "running batch");

        let outcomes: Vec<BatchOutcome> = requests
            .iter()
            .map(|request| BatchOutcome {
                row: request.row,
                calculator: request.calculator.clone(),
                result: engine.calculate(&request.calculator, &request.inputs),
            })
            .collect();

        let unsupported = requests
            .iter()
            .filter(|r| !engine.supports(&r.calculator))
            .count();
        info!(completed = outcomes.len(), unsupported, "batch complete");

        outcomes
    }
}
