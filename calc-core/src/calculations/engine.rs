//! Id-keyed dispatch from calculator id to formula handler.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use super::common::{CalculationError, Outcome};
use super::context::{EngineContext, SystemContext};
use super::inputs::Inputs;
use super::{
    chemistry, construction, conversions, ecology, everyday, financial, health, math, physics,
    sports,
};
use crate::models::{CalculationResult, RawInputs};

/// A handler bound to one calculator id.
#[derive(Clone, Copy)]
pub enum Formula {
    /// Depends on nothing but the parsed inputs.
    Pure(fn(&Inputs<'_>) -> Outcome),
    /// Also reads the clock or the random source.
    Contextual(fn(&Inputs<'_>, &dyn EngineContext) -> Outcome),
}

impl std::fmt::Debug for Formula {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Formula::Pure(_) => f.write_str("Formula::Pure"),
            Formula::Contextual(_) => f.write_str("Formula::Contextual"),
        }
    }
}

/// Registry of handlers keyed by calculator id.
#[derive(Debug, Default, Clone)]
pub struct DispatchTable {
    handlers: HashMap<&'static str, Formula>,
}

impl DispatchTable {
    /// Every built-in handler.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        financial::register(&mut table);
        health::register(&mut table);
        math::register(&mut table);
        physics::register(&mut table);
        chemistry::register(&mut table);
        construction::register(&mut table);
        sports::register(&mut table);
        ecology::register(&mut table);
        everyday::register(&mut table);
        conversions::register(&mut table);
        table
    }

    /// Registers a pure handler, replacing any previous one for `id`.
    pub fn pure(
        &mut self,
        id: &'static str,
        handler: fn(&Inputs<'_>) -> Outcome,
    ) {
        self.handlers.insert(id, Formula::Pure(handler));
    }

    /// Registers a handler that reads the engine context.
    pub fn contextual(
        &mut self,
        id: &'static str,
        handler: fn(&Inputs<'_>, &dyn EngineContext) -> Outcome,
    ) {
        self.handlers.insert(id, Formula::Contextual(handler));
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Option<Formula> {
        self.handlers.get(id).copied()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.handlers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Resolves calculator ids to handlers and runs them.
///
/// `calculate` never fails: an unknown id yields
/// [`CalculationResult::coming_soon`] and a formula that becomes undefined
/// for its inputs yields [`CalculationResult::invalid_inputs`].
///
/// # Example
///
/// ```
/// use calc_core::{CalculationEngine, RawInputs};
///
/// let engine = CalculationEngine::new();
/// let inputs = RawInputs::new()
///     .with("bill", "100")
///     .with("percent", "20")
///     .with("people", "4");
///
/// let result = engine.calculate("tip", &inputs);
/// assert_eq!(result.result, "$30.00");
/// assert_eq!(result.unit, "Per Person");
/// ```
#[derive(Debug)]
pub struct CalculationEngine<C = SystemContext> {
    table: DispatchTable,
    context: C,
}

impl CalculationEngine<SystemContext> {
    pub fn new() -> Self {
        Self::with_context(SystemContext)
    }
}

impl Default for CalculationEngine<SystemContext> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: EngineContext> CalculationEngine<C> {
    /// Engine with every built-in handler and the given context.
    pub fn with_context(context: C) -> Self {
        Self::from_parts(DispatchTable::builtin(), context)
    }

    pub fn from_parts(
        table: DispatchTable,
        context: C,
    ) -> Self {
        Self { table, context }
    }

    pub fn supports(
        &self,
        calculator_id: &str,
    ) -> bool {
        self.table.get(calculator_id).is_some()
    }

    pub fn registered_ids(&self) -> Vec<&'static str> {
        self.table.ids()
    }

    pub fn calculate(
        &self,
        calculator_id: &str,
        raw: &RawInputs,
    ) -> CalculationResult {
        let Some(formula) = self.table.get(calculator_id) else {
            debug!(calculator = calculator_id, "no handler registered");
            return CalculationResult::coming_soon();
        };

        let inputs = Inputs::new(raw);
        let outcome = match formula {
            Formula::Pure(handler) => handler(&inputs),
            Formula::Contextual(handler) => handler(&inputs, &self.context),
        };

        match outcome.and_then(ensure_chartable) {
            Ok(result) => {
                debug!(calculator = calculator_id, result = %result.result, "calculated");
                result
            }
            Err(error) => {
                warn!(calculator = calculator_id, %error, "calculation failed");
                CalculationResult::invalid_inputs()
            }
        }
    }
}

fn ensure_chartable(result: CalculationResult) -> Outcome {
    if result.is_chartable() {
        Ok(result)
    } else {
        Err(CalculationError::UnchartableSeries)
    }
}

static DEFAULT_ENGINE: LazyLock<CalculationEngine> = LazyLock::new(CalculationEngine::new);

/// Runs a calculation on a process-wide engine using [`SystemContext`].
pub fn calculate(
    calculator_id: &str,
    raw: &RawInputs,
) -> CalculationResult {
    DEFAULT_ENGINE.calculate(calculator_id, raw)
}
