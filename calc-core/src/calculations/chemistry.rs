//! Solution concentration and the gas laws.

use super::common::{Outcome, fixed};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

/// Gas constant in L·atm/(mol·K).
const GAS_CONSTANT: f64 = 0.0821;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("molarity", molarity);
    table.pure("density-chem", density);
    table.pure("boyles", boyles_law);
    table.pure("charles", charles_law);
    table.pure("ideal-gas", ideal_gas);
    table.pure("ph", ph);
    table.pure("dilution", dilution);
    table.pure("half-life", half_life);
    table.pure("molality", molality);
    table.pure("percent-yield", percent_yield);
}

fn molarity(inputs: &Inputs<'_>) -> Outcome {
    let moles = inputs.number("mass") / inputs.number("molar_mass");
    let molarity = moles / inputs.number("volume");

    Ok(CalculationResult::new(fixed(molarity, 4)?, "Molar").with_details("Moles/Liter"))
}

fn density(inputs: &Inputs<'_>) -> Outcome {
    let density = inputs.number("mass") / inputs.number("volume");

    Ok(CalculationResult::new(fixed(density, 4)?, "g/mL").with_details("Density"))
}

fn boyles_law(inputs: &Inputs<'_>) -> Outcome {
    let v2 = inputs.number("p1") * inputs.number("v1") / inputs.number("p2");

    Ok(CalculationResult::new(fixed(v2, 2)?, "V2").with_details("P1V1 = P2V2"))
}

/// Solves for T2 at constant pressure.
fn charles_law(inputs: &Inputs<'_>) -> Outcome {
    let t2 = inputs.number("v2") * inputs.number("t1") / inputs.number("v1");

    Ok(CalculationResult::new(fixed(t2, 2)?, "T2 (K)").with_details("V1/T1 = V2/T2"))
}

fn ideal_gas(inputs: &Inputs<'_>) -> Outcome {
    let moles = inputs.number("p") * inputs.number("v") / (GAS_CONSTANT * inputs.number("t"));

    Ok(CalculationResult::new(fixed(moles, 4)?, "Moles (n)").with_details("n = PV/RT"))
}

fn ph(inputs: &Inputs<'_>) -> Outcome {
    let ph = -inputs.number("h").log10();

    Ok(CalculationResult::new(fixed(ph, 2)?, "pH").with_details("Acidity"))
}

fn dilution(inputs: &Inputs<'_>) -> Outcome {
    let v2 = inputs.number("m1") * inputs.number("v1") / inputs.number("m2");

    Ok(CalculationResult::new(fixed(v2, 2)?, "V2").with_details("M1V1 = M2V2"))
}

fn half_life(inputs: &Inputs<'_>) -> Outcome {
    let halvings = inputs.number("t") / inputs.number("h");
    let remaining = inputs.number("n0") * 0.5_f64.powf(halvings);

    Ok(CalculationResult::new(fixed(remaining, 4)?, "Remaining").with_details("Decay"))
}

fn molality(inputs: &Inputs<'_>) -> Outcome {
    let molality = inputs.number("moles") / inputs.number("kg");

    Ok(CalculationResult::new(fixed(molality, 4)?, "m").with_details("mol/kg"))
}

fn percent_yield(inputs: &Inputs<'_>) -> Outcome {
    let percent = inputs.number("actual") / inputs.number("theoretical") * 100.0;

    Ok(CalculationResult::new(fixed(percent, 2)?, "% Yield"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::RawInputs;

    fn run(
        handler: fn(&Inputs<'_>) -> Outcome,
        pairs: &[(&str, &str)],
    ) -> Outcome {
        let raw: RawInputs = pairs.iter().copied().collect();
        handler(&Inputs::new(&raw))
    }

    #[test]
    fn molarity_of_salt_solution() {
        // 58.44 g NaCl in 2 L.
        let result = run(
            molarity,
            &[("mass", "58.44"), ("molar_mass", "58.44"), ("volume", "2")],
        )
        .unwrap();

        assert_eq!(result.result, "0.5000");
        assert_eq!(result.unit, "Molar");
    }

    #[test]
    fn boyles_law_halves_volume_when_pressure_doubles() {
        let result = run(boyles_law, &[("p1", "1"), ("v1", "10"), ("p2", "2")]).unwrap();

        assert_eq!(result.result, "5.00");
    }

    #[test]
    fn charles_law_solves_for_final_temperature() {
        let result = run(charles_law, &[("v1", "2"), ("t1", "300"), ("v2", "4")]).unwrap();

        assert_eq!(result.result, "600.00");
        assert_eq!(result.unit, "T2 (K)");
    }

    #[test]
    fn ideal_gas_at_standard_conditions() {
        let result = run(ideal_gas, &[("p", "1"), ("v", "22.4"), ("t", "273")]).unwrap();

        assert_eq!(result.result, "0.9994");
    }

    #[test]
    fn ph_of_neutral_water() {
        assert_eq!(run(ph, &[("h", "1e-7")]).unwrap().result, "7.00");
    }

    #[test]
    fn ph_of_zero_concentration_is_an_error() {
        assert!(run(ph, &[("h", "0")]).is_err());
    }

    #[test]
    fn half_life_after_two_periods() {
        let result = run(half_life, &[("n0", "100"), ("t", "10"), ("h", "5")]).unwrap();

        assert_eq!(result.result, "25.0000");
    }

    #[test]
    fn percent_yield_has_no_details() {
        let result = run(percent_yield, &[("actual", "45"), ("theoretical", "50")]).unwrap();

        assert_eq!(result.result, "90.00");
        assert_eq!(result.details, "");
    }

    #[test]
    fn zero_denominators_are_errors() {
        assert!(run(molarity, &[("mass", "10")]).is_err());
        assert!(run(dilution, &[("m1", "1"), ("v1", "1")]).is_err());
        assert!(run(molality, &[("moles", "1")]).is_err());
    }
}
