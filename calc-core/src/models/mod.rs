mod calculation_result;
mod calculator;
mod category;
pub mod chart;
mod raw_inputs;

pub use calculation_result::CalculationResult;
pub use calculator::{CalculatorDefinition, InputField, InputKind};
pub use category::{Category, CategoryId};
pub use chart::{ChartDataPoint, TrendDataPoint};
pub use raw_inputs::RawInputs;
