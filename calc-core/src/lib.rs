//! Reference calculator engine.
//!
//! [`catalog`] declares the calculators and their input forms,
//! [`calculations`] maps a calculator id and its raw form values to a
//! [`CalculationResult`], and [`models`] holds the shared data types
//! including the chart-data contract.

pub mod calculations;
pub mod catalog;
pub mod models;

pub use calculations::{
    CalculationEngine, CalculationError, EngineContext, FixedContext, SystemContext, calculate,
};
pub use models::*;
