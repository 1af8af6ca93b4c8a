//! Single-quantity unit conversions. The converted value carries its own
//! unit suffix, so `unit` and `details` stay empty.

use super::common::{Outcome, fixed};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

const LBS_PER_KG: f64 = 2.20462;
const KM_PER_MILE: f64 = 1.60934;
const CM_PER_INCH: f64 = 2.54;
const GRAMS_PER_OUNCE: f64 = 28.3495;
const GALLONS_PER_LITER: f64 = 0.264172;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("celsius-fahrenheit", celsius_to_fahrenheit);
    table.pure("fahrenheit-celsius", fahrenheit_to_celsius);
    table.pure("kg-lbs", kg_to_lbs);
    table.pure("lbs-kg", lbs_to_kg);
    table.pure("miles-km", miles_to_km);
    table.pure("km-miles", km_to_miles);
    table.pure("inch-cm", inch_to_cm);
    table.pure("cm-inch", cm_to_inch);
    table.pure("oz-grams", oz_to_grams);
    table.pure("grams-oz", grams_to_oz);
    table.pure("liters-gal", liters_to_gal);
    table.pure("gal-liters", gal_to_liters);
}

fn converted(
    value: f64,
    dp: u32,
    suffix: &str,
) -> Outcome {
    Ok(CalculationResult::new(format!("{} {suffix}", fixed(value, dp)?), ""))
}

fn celsius_to_fahrenheit(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("celsius") * 9.0 / 5.0 + 32.0, 1, "°F")
}

fn fahrenheit_to_celsius(inputs: &Inputs<'_>) -> Outcome {
    converted((inputs.number("fahrenheit") - 32.0) * 5.0 / 9.0, 1, "°C")
}

fn kg_to_lbs(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("kg") * LBS_PER_KG, 2, "lbs")
}

fn lbs_to_kg(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("lbs") / LBS_PER_KG, 2, "kg")
}

fn miles_to_km(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("miles") * KM_PER_MILE, 2, "km")
}

fn km_to_miles(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("km") / KM_PER_MILE, 2, "mi")
}

fn inch_to_cm(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("in") * CM_PER_INCH, 2, "cm")
}

fn cm_to_inch(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("cm") / CM_PER_INCH, 2, "in")
}

fn oz_to_grams(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("oz") * GRAMS_PER_OUNCE, 2, "g")
}

fn grams_to_oz(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("g") / GRAMS_PER_OUNCE, 2, "oz")
}

fn liters_to_gal(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("l") * GALLONS_PER_LITER, 2, "gal")
}

fn gal_to_liters(inputs: &Inputs<'_>) -> Outcome {
    converted(inputs.number("gal") / GALLONS_PER_LITER, 2, "L")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::inputs::parse_number;
    use crate::models::RawInputs;

    fn run(
        handler: fn(&Inputs<'_>) -> Outcome,
        field: &str,
        value: &str,
    ) -> CalculationResult {
        let raw = RawInputs::new().with(field, value);
        handler(&Inputs::new(&raw)).unwrap()
    }

    #[test]
    fn boiling_point() {
        let result = run(celsius_to_fahrenheit, "celsius", "100");

        assert_eq!(result.result, "212.0 °F");
        assert_eq!(result.unit, "");
        assert_eq!(result.details, "");
    }

    #[test]
    fn body_temperature_in_celsius() {
        assert_eq!(run(fahrenheit_to_celsius, "fahrenheit", "98.6").result, "37.0 °C");
    }

    #[test]
    fn temperature_round_trip_is_within_display_precision() {
        let there = run(celsius_to_fahrenheit, "celsius", "21.3").result;
        let fahrenheit = there.trim_end_matches(" °F");
        let back = run(fahrenheit_to_celsius, "fahrenheit", fahrenheit).result;

        let celsius = parse_number(&back).unwrap();
        assert_relative_eq!(celsius, 21.3, epsilon = 0.1);
    }

    #[test]
    fn weight_conversions() {
        assert_eq!(run(kg_to_lbs, "kg", "10").result, "22.05 lbs");
        assert_eq!(run(lbs_to_kg, "lbs", "220.462").result, "100.00 kg");
        assert_eq!(run(oz_to_grams, "oz", "1").result, "28.35 g");
        assert_eq!(run(grams_to_oz, "g", "100").result, "3.53 oz");
    }

    #[test]
    fn length_conversions() {
        assert_eq!(run(miles_to_km, "miles", "26.2").result, "42.16 km");
        assert_eq!(run(km_to_miles, "km", "10").result, "6.21 mi");
        assert_eq!(run(inch_to_cm, "in", "12").result, "30.48 cm");
        assert_eq!(run(cm_to_inch, "cm", "100").result, "39.37 in");
    }

    #[test]
    fn volume_conversions() {
        assert_eq!(run(liters_to_gal, "l", "10").result, "2.64 gal");
        assert_eq!(run(gal_to_liters, "gal", "1").result, "3.79 L");
    }

    #[test]
    fn missing_value_converts_zero() {
        let raw = RawInputs::new();

        assert_eq!(kg_to_lbs(&Inputs::new(&raw)).unwrap().result, "0.00 lbs");
        assert_eq!(celsius_to_fahrenheit(&Inputs::new(&raw)).unwrap().result, "32.0 °F");
    }
}
