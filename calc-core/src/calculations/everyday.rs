//! Shopping, dining, travel and household arithmetic.

use super::common::{Outcome, fixed, money, plain, round_nearest};
use super::context::EngineContext;
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

/// Average adult reading speed in words per minute.
const WORDS_PER_MINUTE: f64 = 200.0;

/// A child eats this fraction of an adult's slices.
const CHILD_APPETITE: f64 = 0.6;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("fuel-cost", fuel_cost);
    table.pure("tip", tip);
    table.pure("discount", discount);
    table.pure("unit-price", unit_price);
    table.pure("pizza-party", pizza_party);
    table.pure("aspect-ratio", aspect_ratio);
    table.pure("screen-ppi", screen_ppi);
    table.pure("bandwidth", bandwidth);
    table.pure("coffee", coffee);
    table.contextual("age", age);
    table.pure("time-duration", time_duration);
    table.pure("reading-time", reading_time);
}

fn fuel_cost(inputs: &Inputs<'_>) -> Outcome {
    let gallons = inputs.number("distance") / inputs.number("mpg");

    Ok(CalculationResult::new(money(gallons * inputs.number("price"))?, "Trip Cost"))
}

/// Bill plus tip, split evenly.
fn tip(inputs: &Inputs<'_>) -> Outcome {
    let total = inputs.number("bill") * (1.0 + inputs.number("percent") / 100.0);
    let per_person = total / inputs.number("people");

    Ok(CalculationResult::new(money(per_person)?, "Per Person"))
}

fn discount(inputs: &Inputs<'_>) -> Outcome {
    let price = inputs.number("price");
    let percent = inputs.number("discount");

    Ok(CalculationResult::new(money(price * (1.0 - percent / 100.0))?, "Final Price")
        .with_details(format!("Savings: {}", money(price * percent / 100.0)?)))
}

fn unit_price(inputs: &Inputs<'_>) -> Outcome {
    let per_unit = inputs.number("price") / inputs.number("units");

    Ok(CalculationResult::new(format!("${}", fixed(per_unit, 3)?), "Per Unit"))
}

/// Slices an adult eats at the selected hunger level.
fn slices_per_adult(hunger: &str) -> f64 {
    if hunger.contains("Starving") {
        3.5
    } else if hunger.contains("Light") {
        1.5
    } else {
        2.5
    }
}

/// Slices in one pizza of the selected size. Later matches take precedence.
fn slices_per_pizza(size: &str) -> f64 {
    let mut slices = 8.0;
    if size.contains("Small") {
        slices = 6.0;
    }
    if size.contains("Large") {
        slices = 10.0;
    }
    if size.contains("XL") {
        slices = 12.0;
    }
    slices
}

fn pizza_party(inputs: &Inputs<'_>) -> Outcome {
    let size = inputs.text("size");
    let per_adult = slices_per_adult(inputs.text("hunger"));
    let per_child = per_adult * CHILD_APPETITE;

    let total_slices = inputs.number("adults") * per_adult + inputs.number("children") * per_child;
    let pizzas = (total_slices / slices_per_pizza(size)).ceil();

    Ok(CalculationResult::new(format!("{} Pizzas", plain(pizzas)?), size)
        .with_details(format!("Total Slices Needed: {}", plain(total_slices.ceil())?))
        .with_steps([
            format!("Avg Slices/Adult: {}", plain(per_adult)?),
            format!("Avg Slices/Child: {}", fixed(per_child, 1)?),
        ]))
}

/// Height that keeps the original proportions at the new width.
fn aspect_ratio(inputs: &Inputs<'_>) -> Outcome {
    let height = inputs.number("h1") / inputs.number("w1") * inputs.number("w2");

    Ok(CalculationResult::new(plain(round_nearest(height))?, "New Height"))
}

fn screen_ppi(inputs: &Inputs<'_>) -> Outcome {
    let diagonal_px = inputs.number("width").hypot(inputs.number("height"));
    let ppi = round_nearest(diagonal_px / inputs.number("diag"));

    Ok(CalculationResult::new(plain(ppi)?, "PPI").with_details("Pixels Per Inch"))
}

/// Seconds to move `size` GB at `speed` Mbps.
fn bandwidth(inputs: &Inputs<'_>) -> Outcome {
    let seconds = inputs.number("size") * 8000.0 / inputs.number("speed");

    Ok(CalculationResult::new(format!("{} seconds", fixed(seconds, 1)?), "Transfer Time"))
}

fn coffee(inputs: &Inputs<'_>) -> Outcome {
    let ratio = inputs.number("ratio");
    let grams = round_nearest(inputs.number("water") / ratio);

    Ok(CalculationResult::new(format!("{}g", plain(grams)?), "Coffee Beans")
        .with_details(format!("Ratio 1:{}", plain(ratio)?)))
}

/// Whole years between the birth year and the current calendar year.
fn age(
    inputs: &Inputs<'_>,
    context: &dyn EngineContext,
) -> Outcome {
    let years = f64::from(context.current_year()) - inputs.number("year");

    Ok(CalculationResult::new(plain(years)?, "Years Old"))
}

fn time_duration(inputs: &Inputs<'_>) -> Outcome {
    let hours = (inputs.number("h2") - inputs.number("h1")).abs();

    Ok(CalculationResult::new(plain(hours)?, "Hours"))
}

fn reading_time(inputs: &Inputs<'_>) -> Outcome {
    let minutes = (inputs.number("words") / WORDS_PER_MINUTE).ceil();

    Ok(CalculationResult::new(format!("{} min", plain(minutes)?), "Reading Time")
        .with_details("Avg 200 wpm"))
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

    // =========================================================================
    // Money tests
    // =========================================================================

    #[test]
    fn tip_split_four_ways() {
        let result = run(tip, &[("bill", "100"), ("percent", "20"), ("people", "4")]);

        assert_eq!(result.result, "$30.00");
        assert_eq!(result.unit, "Per Person");
    }

    #[test]
    fn tip_among_nobody_is_an_error() {
        let raw = RawInputs::from_iter([("bill", "100"), ("percent", "20"), ("people", "0")]);

        assert!(tip(&Inputs::new(&raw)).is_err());
    }

    #[test]
    fn discount_shows_savings() {
        let result = run(discount, &[("price", "49.99"), ("discount", "20")]);

        assert_eq!(result.result, "$39.99");
        assert_eq!(result.details, "Savings: $10.00");
    }

    #[test]
    fn unit_price_has_three_decimals() {
        let result = run(unit_price, &[("price", "5"), ("units", "3")]);

        assert_eq!(result.result, "$1.667");
    }

    #[test]
    fn fuel_cost_of_trip() {
        let result = run(fuel_cost, &[("distance", "300"), ("mpg", "30"), ("price", "3.49")]);

        assert_eq!(result.result, "$34.90");
    }

    // =========================================================================
    // Pizza party tests
    // =========================================================================

    #[test]
    fn pizza_party_for_mixed_group() {
        let result = run(
            pizza_party,
            &[
                ("adults", "3"),
                ("children", "2"),
                ("hunger", "Average (2-3 slices)"),
                ("size", "Medium (8 slices)"),
            ],
        );

        assert_eq!(result.result, "2 Pizzas");
        assert_eq!(result.unit, "Medium (8 slices)");
        assert_eq!(result.details, "Total Slices Needed: 11");
        assert_eq!(result.steps, vec!["Avg Slices/Adult: 2.5", "Avg Slices/Child: 1.5"]);
    }

    #[test]
    fn hunger_levels() {
        assert_eq!(slices_per_adult("Light Snack (1-2 slices)"), 1.5);
        assert_eq!(slices_per_adult("Starving (3-4 slices)"), 3.5);
        assert_eq!(slices_per_adult(""), 2.5);
    }

    #[test]
    fn pizza_sizes() {
        assert_eq!(slices_per_pizza("Small (6 slices)"), 6.0);
        assert_eq!(slices_per_pizza("Medium (8 slices)"), 8.0);
        assert_eq!(slices_per_pizza("Large (10 slices)"), 10.0);
        assert_eq!(slices_per_pizza("XL (12 slices)"), 12.0);
        assert_eq!(slices_per_pizza(""), 8.0);
    }

    // =========================================================================
    // Screen and media tests
    // =========================================================================

    #[test]
    fn aspect_ratio_keeps_proportions() {
        let result = run(aspect_ratio, &[("w1", "1920"), ("h1", "1080"), ("w2", "1280")]);

        assert_eq!(result.result, "720");
    }

    #[test]
    fn screen_ppi_of_24_inch_full_hd() {
        let result = run(screen_ppi, &[("width", "1920"), ("height", "1080"), ("diag", "24")]);

        assert_eq!(result.result, "92");
    }

    #[test]
    fn download_time() {
        let result = run(bandwidth, &[("size", "4"), ("speed", "100")]);

        assert_eq!(result.result, "320.0 seconds");
    }

    #[test]
    fn coffee_beans_for_ratio() {
        let result = run(coffee, &[("water", "500"), ("ratio", "16")]);

        assert_eq!(result.result, "31g");
        assert_eq!(result.details, "Ratio 1:16");
    }

    // =========================================================================
    // Time tests
    // =========================================================================

    #[test]
    fn age_uses_context_year() {
        let raw = RawInputs::from_iter([("year", "1990")]);
        let context = FixedContext { random_unit: 0.0, current_year: 2026 };

        let result = age(&Inputs::new(&raw), &context).unwrap();

        assert_eq!(result.result, "36");
        assert_eq!(result.unit, "Years Old");
    }

    #[test]
    fn duration_is_absolute() {
        assert_eq!(run(time_duration, &[("h1", "17"), ("h2", "9")]).result, "8");
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(run(reading_time, &[("words", "1001")]).result, "6 min");
    }
}
