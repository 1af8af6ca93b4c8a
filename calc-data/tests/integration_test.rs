//! Integration tests running the batch fixture through the real engine.

use calc_core::{CalculationEngine, CalculationResult, FixedContext};
use calc_data::{BatchLoadError, BatchLoader, BatchOutcome};
use pretty_assertions::assert_eq;

const TEST_CSV: &str = include_str!("../test-data/batch_requests.csv");

fn run_fixture() -> Vec<BatchOutcome> {
    let engine = CalculationEngine::with_context(FixedContext {
        random_unit: 0.5,
        current_year: 2026,
    });
    let requests = BatchLoader::parse(TEST_CSV.as_bytes()).expect("fixture should parse");

    BatchLoader::run(&engine, &requests)
}

#[test]
fn test_fixture_runs_every_row_in_order() {
    let outcomes = run_fixture();

    let calculators: Vec<&str> = outcomes.iter().map(|o| o.calculator.as_str()).collect();
    assert_eq!(
        calculators,
        vec!["tip", "bmi", "quadratic", "mean-median", "does-not-exist"]
    );
    let rows: Vec<usize> = outcomes.iter().map(|o| o.row).collect();
    assert_eq!(rows, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_fixture_results() {
    let outcomes = run_fixture();

    assert_eq!(outcomes[0].result.result, "$30.00");
    assert_eq!(outcomes[0].result.unit, "Per Person");

    assert_eq!(outcomes[1].result.result, "23.6");
    assert_eq!(outcomes[1].result.details, "Category: Normal");

    assert_eq!(outcomes[2].result.result, "x = 2.00");
    assert_eq!(outcomes[2].result.unit, "or 1.00");

    assert_eq!(outcomes[3].result.result, "2.50");
    assert_eq!(outcomes[3].result.details, "Median: 2.5");
}

#[test]
fn test_unknown_calculator_is_coming_soon() {
    let outcomes = run_fixture();

    assert_eq!(outcomes[4].result, CalculationResult::coming_soon());
}

#[test]
fn test_blank_cells_fall_back_to_defaults() {
    let csv = "calculator,bill,percent,people\ntip,100,,4\n";
    let requests = BatchLoader::parse(csv.as_bytes()).unwrap();

    let outcomes = BatchLoader::run(&CalculationEngine::new(), &requests);

    assert_eq!(outcomes[0].result.result, "$25.00");
}

#[test]
fn test_error_reports_row_number() {
    let csv = "calculator,bill\ntip,100\ntip,50\n  ,25\n";

    let err = BatchLoader::parse(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, BatchLoadError::EmptyCalculatorId { row: 3 }));
    assert_eq!(err.to_string(), "empty calculator id on row 3");
}
