//! Random draws and the current year, the only inputs a handler may take
//! from outside its raw inputs.

use chrono::Datelike;

/// Sources of non-determinism available to handlers.
///
/// Only the `random` and `age` calculators read from the context; every
/// other handler is a pure function of its inputs.
pub trait EngineContext: Send + Sync {
    /// Uniform draw from `[0, 1)`.
    fn random_unit(&self) -> f64;

    /// Calendar year in local time.
    fn current_year(&self) -> i32;
}

/// Thread-local RNG and the local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemContext;

impl EngineContext for SystemContext {
    fn random_unit(&self) -> f64 {
        rand::random::<f64>()
    }

    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Context returning fixed values, for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedContext {
    pub random_unit: f64,
    pub current_year: i32,
}

impl EngineContext for FixedContext {
    fn random_unit(&self) -> f64 {
        self.random_unit
    }

    fn current_year(&self) -> i32 {
        self.current_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_unit_is_in_half_open_range() {
        let context = SystemContext;

        for _ in 0..100 {
            let draw = context.random_unit();
            assert!((0.0..1.0).contains(&draw), "draw out of range: {draw}");
        }
    }

    #[test]
    fn system_year_is_plausible() {
        assert!(SystemContext.current_year() >= 2024);
    }

    #[test]
    fn fixed_context_returns_configured_values() {
        let context = FixedContext {
            random_unit: 0.25,
            current_year: 2030,
        };

        assert_eq!(context.random_unit(), 0.25);
        assert_eq!(context.current_year(), 2030);
    }
}
