//! File-based inputs for the calculator engine: CSV batches of requests and
//! TOML files holding the form values of a single calculation.

mod inputs_toml;
mod loader;

pub use inputs_toml::load_inputs_toml;
pub use loader::{BatchLoadError, BatchLoader, BatchOutcome, BatchRequest, CALCULATOR_COLUMN};
