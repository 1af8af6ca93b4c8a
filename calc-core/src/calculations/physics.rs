//! Classical mechanics and electricity. Every result is two decimals in SI
//! units.

use super::common::{Outcome, fixed};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

/// Standard gravity in m/s².
const GRAVITY: f64 = 9.81;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("velocity", velocity);
    table.pure("force", force);
    table.pure("ohms-law", ohms_law);
    table.pure("kinetic-energy", kinetic_energy);
    table.pure("potential-energy", potential_energy);
    table.pure("power", power);
    table.pure("work", work);
    table.pure("momentum", momentum);
    table.pure("pressure", pressure);
    table.pure("frequency", frequency);
    table.pure("torque", torque);
    table.pure("density-phys", density);
}

fn formula(
    value: f64,
    unit: &str,
    details: &str,
) -> Outcome {
    Ok(CalculationResult::new(fixed(value, 2)?, unit).with_details(details))
}

fn velocity(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("distance") / inputs.number("time"), "Units/s", "Speed")
}

fn force(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("mass") * inputs.number("acceleration"), "Newtons", "F = ma")
}

fn ohms_law(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("i") * inputs.number("r"), "Volts", "V = I * R")
}

fn kinetic_energy(inputs: &Inputs<'_>) -> Outcome {
    let energy = 0.5 * inputs.number("mass") * inputs.number("velocity").powi(2);
    formula(energy, "Joules", "KE = ½mv²")
}

fn potential_energy(inputs: &Inputs<'_>) -> Outcome {
    let energy = inputs.number("mass") * GRAVITY * inputs.number("height");
    formula(energy, "Joules", "PE = mgh")
}

fn power(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("work") / inputs.number("time"), "Watts", "P = W/t")
}

fn work(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("force") * inputs.number("distance"), "Joules", "W = Fd")
}

fn momentum(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("mass") * inputs.number("velocity"), "kg·m/s", "p = mv")
}

fn pressure(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("force") / inputs.number("area"), "Pascals", "P = F/A")
}

fn frequency(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("speed") / inputs.number("wavelength"), "Hz", "f = v/λ")
}

fn torque(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("force") * inputs.number("radius"), "N·m", "τ = rF")
}

fn density(inputs: &Inputs<'_>) -> Outcome {
    formula(inputs.number("mass") / inputs.number("volume"), "kg/m³", "ρ = m/V")
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
    fn force_is_mass_times_acceleration() {
        let result = run(force, &[("mass", "10"), ("acceleration", "9.8")]).unwrap();

        assert_eq!(result.result, "98.00");
        assert_eq!(result.unit, "Newtons");
        assert_eq!(result.details, "F = ma");
    }

    #[test]
    fn kinetic_energy_of_moving_mass() {
        let result = run(kinetic_energy, &[("mass", "2"), ("velocity", "3")]).unwrap();

        assert_eq!(result.result, "9.00");
    }

    #[test]
    fn potential_energy_uses_standard_gravity() {
        let result = run(potential_energy, &[("mass", "10"), ("height", "2")]).unwrap();

        assert_eq!(result.result, "196.20");
    }

    #[test]
    fn frequency_of_sound_wave() {
        let result = run(frequency, &[("speed", "343"), ("wavelength", "0.5")]).unwrap();

        assert_eq!(result.result, "686.00");
        assert_eq!(result.unit, "Hz");
    }

    #[test]
    fn ohms_law_voltage() {
        assert_eq!(run(ohms_law, &[("i", "0.5"), ("r", "220")]).unwrap().result, "110.00");
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(run(velocity, &[("distance", "100")]).is_err());
        assert!(run(pressure, &[("force", "5")]).is_err());
        assert!(run(density, &[]).is_err());
    }

    #[test]
    fn products_of_missing_inputs_are_zero() {
        assert_eq!(run(torque, &[]).unwrap().result, "0.00");
        assert_eq!(run(momentum, &[("mass", "3")]).unwrap().result, "0.00");
    }
}
