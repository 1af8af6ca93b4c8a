//! Calculation dispatch and the per-category formula handlers.
//!
//! [`CalculationEngine`] maps a calculator id to a handler. Each category
//! module registers its handlers with a [`DispatchTable`]; the shared
//! modules supply input parsing, display formatting and the amortization
//! schedule used by the loan calculators.

pub mod amortization;
mod chemistry;
pub mod common;
mod construction;
pub mod context;
mod conversions;
mod ecology;
pub mod engine;
mod everyday;
mod financial;
mod health;
pub mod inputs;
mod math;
mod physics;
mod sports;

pub use common::{CalculationError, Outcome};
pub use context::{EngineContext, FixedContext, SystemContext};
pub use engine::{CalculationEngine, DispatchTable, Formula, calculate};
pub use inputs::Inputs;
