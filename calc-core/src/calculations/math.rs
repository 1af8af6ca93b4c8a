//! Arithmetic, geometry, statistics and combinatorics.

use std::f64::consts::PI;

use super::common::{Outcome, fixed, grouped, or_not_available, plain};
use super::context::EngineContext;
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

/// Largest magnitude below which every `f64` integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Euclid's algorithm gives up after this many steps.
const MAX_GCD_STEPS: usize = 10_000;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("percentage", percentage);
    table.pure("circle", circle);
    table.pure("fraction-add", fraction_add);
    table.pure("gcf-lcm", gcf_lcm);
    table.pure("mean-median", mean_median);
    table.pure("pythagorean", pythagorean);
    table.pure("slope", slope);
    table.pure("quadratic", quadratic);
    table.pure("factorial", factorial_handler);
    table.pure("permutation", permutation);
    table.pure("combination", combination);
    table.pure("log", logarithm);
    table.contextual("random", random);
    table.pure("prime", prime);
    table.pure("std-dev", std_dev);
    table.pure("triangle-area", triangle_area);
    table.pure("cone-vol", cone_volume);
    table.pure("sphere-vol", sphere_volume);
    table.pure("cylinder-vol", cylinder_volume);
    table.pure("cube", cube);
}

fn percentage(inputs: &Inputs<'_>) -> Outcome {
    let value = inputs.number("val") * inputs.number("percent") / 100.0;

    Ok(CalculationResult::new(grouped(value, 3)?, "Result").with_details("Simple Percentage"))
}

fn circle(inputs: &Inputs<'_>) -> Outcome {
    let radius = inputs.number("radius");

    Ok(CalculationResult::new(fixed(PI * radius.powi(2), 2)?, "Area")
        .with_details(format!("Circumference: {}", fixed(2.0 * PI * radius, 2)?)))
}

fn fraction_add(inputs: &Inputs<'_>) -> Outcome {
    let (n1, d1) = (inputs.number("n1"), inputs.number("d1"));
    let (n2, d2) = (inputs.number("n2"), inputs.number("d2"));

    let numerator = n1 * d2 + n2 * d1;
    let denominator = d1 * d2;

    Ok(CalculationResult::new(
        format!("{}/{}", plain(numerator)?, plain(denominator)?),
        "Fraction",
    )
    .with_details(format!(
        "Decimal: {}",
        or_not_available(fixed(numerator / denominator, 3))
    )))
}

/// Euclid on floats, so fractional inputs still terminate.
fn gcd(
    mut a: f64,
    mut b: f64,
) -> f64 {
    for _ in 0..MAX_GCD_STEPS {
        if b == 0.0 || b.is_nan() {
            break;
        }
        (a, b) = (b, a % b);
    }
    a
}

fn gcf_lcm(inputs: &Inputs<'_>) -> Outcome {
    let (a, b) = (inputs.number("a"), inputs.number("b"));
    let gcf = gcd(a, b);
    let lcm = a * b / gcf;

    Ok(
        CalculationResult::new(format!("GCF: {}", plain(gcf)?), format!("LCM: {}", plain(lcm)?))
            .with_details("Greatest Common Factor & Least Common Multiple"),
    )
}

/// Middle value of a sorted, non-empty list.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn mean_median(inputs: &Inputs<'_>) -> Outcome {
    let mut values = inputs.number_list("list");
    if values.is_empty() {
        return Ok(CalculationResult::new("0", "Empty"));
    }
    values.sort_by(f64::total_cmp);

    Ok(CalculationResult::new(fixed(mean(&values), 2)?, "Mean (Average)")
        .with_details(format!("Median: {}", plain(median(&values))?)))
}

fn pythagorean(inputs: &Inputs<'_>) -> Outcome {
    let hypotenuse = inputs.number("a").hypot(inputs.number("b"));

    Ok(CalculationResult::new(fixed(hypotenuse, 2)?, "Hypotenuse").with_details("a² + b² = c²"))
}

fn slope(inputs: &Inputs<'_>) -> Outcome {
    let rise = inputs.number("y2") - inputs.number("y1");
    let run = inputs.number("x2") - inputs.number("x1");

    Ok(CalculationResult::new(fixed(rise / run, 2)?, "Slope (m)").with_details("Rise over Run"))
}

fn quadratic(inputs: &Inputs<'_>) -> Outcome {
    let (a, b, c) = (inputs.number("a"), inputs.number("b"), inputs.number("c"));
    let root = (b * b - 4.0 * a * c).sqrt();

    if root.is_nan() {
        return Ok(CalculationResult::new("No Real Roots", "Complex").with_details("Discriminant < 0"));
    }

    Ok(CalculationResult::new(
        format!("x = {}", fixed((-b + root) / (2.0 * a), 2)?),
        format!("or {}", fixed((-b - root) / (2.0 * a), 2)?),
    )
    .with_details("Roots of Equation"))
}

/// `n · (n-1) · …` down to the first factor at or below 1. Non-integers
/// are accepted (`4.5! = 4.5 · 3.5 · 2.5 · 1.5`). Stops as soon as the
/// product overflows.
fn factorial(n: f64) -> f64 {
    let mut product = 1.0;
    let mut k = n;
    while k > 1.0 {
        product *= k;
        if !product.is_finite() {
            break;
        }
        k -= 1.0;
    }
    product
}

fn factorial_handler(inputs: &Inputs<'_>) -> Outcome {
    let n = inputs.number("n");

    Ok(CalculationResult::new(grouped(factorial(n), 3)?, "Factorial")
        .with_details(format!("{}!", plain(n)?)))
}

fn permutation(inputs: &Inputs<'_>) -> Outcome {
    let (n, r) = (inputs.number("n"), inputs.number("r"));
    let count = factorial(n) / factorial(n - r);

    Ok(CalculationResult::new(grouped(count, 3)?, "Permutations").with_details("Order matters (nPr)"))
}

fn combination(inputs: &Inputs<'_>) -> Outcome {
    let (n, r) = (inputs.number("n"), inputs.number("r"));
    let count = factorial(n) / (factorial(r) * factorial(n - r));

    Ok(CalculationResult::new(grouped(count, 3)?, "Combinations")
        .with_details("Order doesn't matter (nCr)"))
}

fn logarithm(inputs: &Inputs<'_>) -> Outcome {
    let (x, base) = (inputs.number("x"), inputs.number("b"));

    Ok(CalculationResult::new(fixed(x.ln() / base.ln(), 4)?, "Logarithm")
        .with_details(format!("Log base {}", plain(base)?)))
}

/// Uniform integer in `[min, max]`.
fn random(
    inputs: &Inputs<'_>,
    context: &dyn EngineContext,
) -> Outcome {
    let (min, max) = (inputs.number("min"), inputs.number("max"));
    let value = (context.random_unit() * (max - min + 1.0) + min).floor();

    Ok(CalculationResult::new(plain(value)?, "Random Number").with_details("Inclusive Range"))
}

/// Trial division over `6k ± 1`. Only whole numbers can be prime; every
/// `f64` at or beyond 2^53 is even.
fn is_prime(n: f64) -> bool {
    if n.fract() != 0.0 || !(2.0..MAX_SAFE_INTEGER).contains(&n) {
        return false;
    }
    let n = n as u64;
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor = 5_u64;
    while divisor * divisor <= n {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

fn prime(inputs: &Inputs<'_>) -> Outcome {
    let verdict = if is_prime(inputs.number("n")) {
        "Prime"
    } else {
        "Not Prime"
    };

    Ok(CalculationResult::new(verdict, ""))
}

/// Population standard deviation (divides by N).
fn std_dev(inputs: &Inputs<'_>) -> Outcome {
    let values = inputs.number_list("list");
    let mean = mean(&values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    Ok(CalculationResult::new(fixed(variance.sqrt(), 4)?, "Standard Deviation")
        .with_details("Population SD"))
}

fn triangle_area(inputs: &Inputs<'_>) -> Outcome {
    let area = 0.5 * inputs.number("base") * inputs.number("height");

    Ok(CalculationResult::new(fixed(area, 2)?, "Area"))
}

fn cone_volume(inputs: &Inputs<'_>) -> Outcome {
    let volume = PI * inputs.number("radius").powi(2) * inputs.number("height") / 3.0;

    Ok(CalculationResult::new(fixed(volume, 2)?, "Volume"))
}

fn sphere_volume(inputs: &Inputs<'_>) -> Outcome {
    let volume = 4.0 / 3.0 * PI * inputs.number("radius").powi(3);

    Ok(CalculationResult::new(fixed(volume, 2)?, "Volume"))
}

fn cylinder_volume(inputs: &Inputs<'_>) -> Outcome {
    let volume = PI * inputs.number("radius").powi(2) * inputs.number("height");

    Ok(CalculationResult::new(fixed(volume, 2)?, "Volume"))
}

fn cube(inputs: &Inputs<'_>) -> Outcome {
    let side = inputs.number("side");

    Ok(CalculationResult::new(fixed(side.powi(3), 2)?, "Volume")
        .with_details(format!("Surface Area: {}", plain(6.0 * side.powi(2))?)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::context::FixedContext;
    use crate::models::RawInputs;

    fn run(
        handler: fn(&Inputs<'_>) -> Outcome,
        pairs: &[(&str, &str)],
    ) -> CalculationResult {
        let raw: RawInputs = pairs.iter().copied().collect();
        handler(&Inputs::new(&raw)).unwrap()
    }

    fn fails(
        handler: fn(&Inputs<'_>) -> Outcome,
        pairs: &[(&str, &str)],
    ) -> bool {
        let raw: RawInputs = pairs.iter().copied().collect();
        handler(&Inputs::new(&raw)).is_err()
    }

    // =========================================================================
    // Arithmetic tests
    // =========================================================================

    #[test]
    fn percentage_of_value() {
        let result = run(percentage, &[("val", "250000"), ("percent", "15")]);

        assert_eq!(result.result, "37,500");
    }

    #[test]
    fn fraction_addition_is_not_reduced() {
        let result = run(fraction_add, &[("n1", "1"), ("d1", "2"), ("n2", "1"), ("d2", "3")]);

        assert_eq!(result.result, "5/6");
        assert_eq!(result.details, "Decimal: 0.833");
    }

    #[test]
    fn fraction_with_zero_denominator_keeps_fraction() {
        let result = run(fraction_add, &[("n1", "1"), ("n2", "1"), ("d2", "3")]);

        assert_eq!(result.result, "3/0");
        assert_eq!(result.details, "Decimal: n/a");
    }

    #[test]
    fn gcd_and_lcm() {
        let result = run(gcf_lcm, &[("a", "12"), ("b", "18")]);

        assert_eq!(result.result, "GCF: 6");
        assert_eq!(result.unit, "LCM: 36");
    }

    #[test]
    fn gcd_handles_negative_and_zero() {
        assert_eq!(gcd(-4.0, 6.0), 2.0);
        assert_eq!(gcd(7.0, 0.0), 7.0);
    }

    #[test]
    fn gcd_of_fractional_values_terminates() {
        assert!(gcd(1.0, 1e-300).is_finite());
    }

    // =========================================================================
    // Statistics tests
    // =========================================================================

    #[test]
    fn mean_and_median_of_even_count() {
        let result = run(mean_median, &[("list", "1, 2, 3, 4")]);

        assert_eq!(result.result, "2.50");
        assert_eq!(result.details, "Median: 2.5");
    }

    #[test]
    fn median_of_odd_count() {
        let result = run(mean_median, &[("list", "3, 1, 2")]);

        assert_eq!(result.result, "2.00");
        assert_eq!(result.details, "Median: 2");
    }

    #[test]
    fn mean_median_ignores_bad_tokens() {
        let result = run(mean_median, &[("list", "10, abc, 20,,30")]);

        assert_eq!(result.result, "20.00");
        assert_eq!(result.details, "Median: 20");
    }

    #[test]
    fn mean_median_of_empty_list() {
        let result = run(mean_median, &[("list", "x, y")]);

        assert_eq!(result.result, "0");
        assert_eq!(result.unit, "Empty");
        assert_eq!(result.details, "");
    }

    #[test]
    fn population_standard_deviation() {
        let result = run(std_dev, &[("list", "2, 4, 4, 4, 5, 5, 7, 9")]);

        assert_eq!(result.result, "2.0000");
        assert_eq!(result.details, "Population SD");
    }

    #[test]
    fn standard_deviation_of_empty_list_is_an_error() {
        assert!(fails(std_dev, &[("list", "")]));
    }

    // =========================================================================
    // Algebra tests
    // =========================================================================

    #[test]
    fn quadratic_with_two_real_roots() {
        let result = run(quadratic, &[("a", "1"), ("b", "-3"), ("c", "2")]);

        assert_eq!(result.result, "x = 2.00");
        assert_eq!(result.unit, "or 1.00");
        assert_eq!(result.details, "Roots of Equation");
    }

    #[test]
    fn quadratic_with_negative_discriminant() {
        let result = run(quadratic, &[("a", "1"), ("b", "0"), ("c", "1")]);

        assert_eq!(result.result, "No Real Roots");
        assert_eq!(result.unit, "Complex");
    }

    #[test]
    fn quadratic_with_zero_leading_coefficient_is_an_error() {
        assert!(fails(quadratic, &[("b", "2"), ("c", "1")]));
    }

    #[test]
    fn slope_between_points() {
        let result = run(slope, &[("x1", "1"), ("y1", "1"), ("x2", "3"), ("y2", "5")]);

        assert_eq!(result.result, "2.00");
    }

    #[test]
    fn logarithm_base_ten() {
        let result = run(logarithm, &[("x", "1000"), ("b", "10")]);

        assert_eq!(result.result, "3.0000");
        assert_eq!(result.details, "Log base 10");
    }

    #[test]
    fn logarithm_of_zero_is_an_error() {
        assert!(fails(logarithm, &[("x", "0"), ("b", "10")]));
    }

    // =========================================================================
    // Combinatorics tests
    // =========================================================================

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(4.5), 4.5 * 3.5 * 2.5 * 1.5);
    }

    #[test]
    fn factorial_overflow_stops() {
        assert_eq!(factorial(1e300), f64::INFINITY);
        assert_eq!(factorial(171.0), f64::INFINITY);
    }

    #[test]
    fn factorial_result_is_grouped() {
        let result = run(factorial_handler, &[("n", "10")]);

        assert_eq!(result.result, "3,628,800");
        assert_eq!(result.details, "10!");
    }

    #[test]
    fn factorial_overflow_is_an_error() {
        assert!(fails(factorial_handler, &[("n", "200")]));
    }

    #[test]
    fn permutations_and_combinations() {
        assert_eq!(run(permutation, &[("n", "5"), ("r", "2")]).result, "20");
        assert_eq!(run(combination, &[("n", "5"), ("r", "2")]).result, "10");
    }

    // =========================================================================
    // Random and prime tests
    // =========================================================================

    #[test]
    fn random_maps_unit_draw_onto_inclusive_range() {
        let raw = RawInputs::from_iter([("min", "1"), ("max", "6")]);
        let inputs = Inputs::new(&raw);

        let low = FixedContext { random_unit: 0.0, current_year: 2026 };
        let high = FixedContext { random_unit: 0.999_999, current_year: 2026 };

        assert_eq!(random(&inputs, &low).unwrap().result, "1");
        assert_eq!(random(&inputs, &high).unwrap().result, "6");
    }

    #[test]
    fn primes_are_detected() {
        for n in [2.0, 3.0, 5.0, 7.0, 97.0, 7919.0, 2_147_483_647.0] {
            assert!(is_prime(n), "{n} should be prime");
        }
    }

    #[test]
    fn non_primes_are_rejected() {
        for n in [-7.0, 0.0, 1.0, 4.0, 9.0, 25.0, 7.5, 1e20, f64::NAN] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn prime_handler_has_empty_unit() {
        let result = run(prime, &[("n", "13")]);

        assert_eq!(result.result, "Prime");
        assert_eq!(result.unit, "");
    }

    // =========================================================================
    // Geometry tests
    // =========================================================================

    #[test]
    fn circle_area_and_circumference() {
        let result = run(circle, &[("radius", "2")]);

        assert_eq!(result.result, "12.57");
        assert_eq!(result.details, "Circumference: 12.57");
    }

    #[test]
    fn pythagorean_hypotenuse() {
        assert_eq!(run(pythagorean, &[("a", "3"), ("b", "4")]).result, "5.00");
    }

    #[test]
    fn solid_volumes() {
        assert_eq!(run(cone_volume, &[("radius", "3"), ("height", "4")]).result, "37.70");
        assert_eq!(run(sphere_volume, &[("radius", "1")]).result, "4.19");
        assert_eq!(run(cylinder_volume, &[("radius", "1"), ("height", "2")]).result, "6.28");
        assert_eq!(run(triangle_area, &[("base", "6"), ("height", "3")]).result, "9.00");
    }

    #[test]
    fn cube_volume_and_surface() {
        let result = run(cube, &[("side", "3")]);

        assert_eq!(result.result, "27.00");
        assert_eq!(result.details, "Surface Area: 54");
    }
}
