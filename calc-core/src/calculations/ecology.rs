//! Household footprint estimates.

use super::common::{Outcome, fixed, money, money_grouped, plain};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

/// Pounds of CO2 from burning one gallon of gasoline.
const CO2_LBS_PER_GALLON: f64 = 19.6;

/// Pounds of CO2 one mature tree absorbs per year.
const CO2_LBS_PER_TREE: f64 = 48.0;

/// Kilograms of CO2 per pound of beef.
const CO2_KG_PER_LB_BEEF: f64 = 27.0;

/// Kilowatt-hours saved by recycling one aluminium can.
const KWH_PER_CAN: f64 = 0.2;

/// Commuting days in a year: five days a week for fifty weeks.
const COMMUTE_DAYS: f64 = 5.0 * 50.0;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("carbon-drive", carbon_drive);
    table.pure("electricity-cost", electricity_cost);
    table.pure("water-shower", shower_water);
    table.pure("plastic", plastic_bottles);
    table.pure("solar", solar_panels);
    table.pure("tree-offset", tree_offset);
    table.pure("meat-carbon", meat_carbon);
    table.pure("recycling", recycling);
    table.pure("commute-cost", commute_cost);
    table.pure("paper-waste", paper_waste);
}

fn carbon_drive(inputs: &Inputs<'_>) -> Outcome {
    let gallons = inputs.number("distance") / inputs.number("mpg");

    Ok(CalculationResult::new(fixed(gallons * CO2_LBS_PER_GALLON, 1)?, "lbs CO2")
        .with_details("1 gal gas = 19.6 lbs CO2"))
}

/// Monthly cost of a device at `rate` cents per kWh.
fn electricity_cost(inputs: &Inputs<'_>) -> Outcome {
    let daily_kwh = inputs.number("watts") * inputs.number("hours") / 1000.0;
    let monthly = daily_kwh * (inputs.number("rate") / 100.0) * 30.0;

    Ok(CalculationResult::new(money(monthly)?, "Cost / Month").with_details("Based on 30 days"))
}

fn shower_water(inputs: &Inputs<'_>) -> Outcome {
    let gallons = inputs.number("min") * inputs.number("gpm");

    Ok(CalculationResult::new(plain(gallons)?, "Gallons"))
}

fn plastic_bottles(inputs: &Inputs<'_>) -> Outcome {
    Ok(CalculationResult::new(plain(inputs.number("daily") * 365.0)?, "Bottles/Year"))
}

/// Panels needed to offset a monthly bill, at roughly 0.15 dollars of
/// output per panel per sun hour.
fn solar_panels(inputs: &Inputs<'_>) -> Outcome {
    let panels = inputs.number("bill") / (inputs.number("sun") * 30.0 * 0.15);

    Ok(CalculationResult::new(format!("{} Panels", plain(panels.ceil())?), "Estimated (300W)")
        .with_details("Rough Estimate"))
}

fn tree_offset(inputs: &Inputs<'_>) -> Outcome {
    let trees = (inputs.number("co2") / CO2_LBS_PER_TREE).ceil();

    Ok(CalculationResult::new(format!("{} Trees", plain(trees)?), "Needed")
        .with_details("1 mature tree absorbs ~48lbs CO2/yr"))
}

fn meat_carbon(inputs: &Inputs<'_>) -> Outcome {
    let kg = inputs.number("lbs") * CO2_KG_PER_LB_BEEF;

    Ok(
        CalculationResult::new(format!("{} kg CO2", fixed(kg, 1)?), "Weekly Emissions")
            .with_details("Beef is high impact"),
    )
}

fn recycling(inputs: &Inputs<'_>) -> Outcome {
    let kwh = inputs.number("cans") * KWH_PER_CAN;

    Ok(CalculationResult::new(format!("{} kWh", plain(kwh)?), "Energy Saved"))
}

/// Round-trip fuel cost over a working year.
fn commute_cost(inputs: &Inputs<'_>) -> Outcome {
    let yearly_miles = inputs.number("miles") * 2.0 * COMMUTE_DAYS;
    let cost = yearly_miles / inputs.number("mpg") * inputs.number("price");

    Ok(CalculationResult::new(money_grouped(cost, 3)?, "Annual Cost")
        .with_details("5 days/wk, 50 wks/yr"))
}

fn paper_waste(inputs: &Inputs<'_>) -> Outcome {
    let trees = inputs.number("reams") * 12.0 * 0.06;

    Ok(CalculationResult::new(format!("{} Trees", fixed(trees, 1)?), "Per Year")
        .with_details("1 tree ~ 16 reams"))
}
