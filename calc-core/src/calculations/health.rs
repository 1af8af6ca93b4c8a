//! Body metrics, energy expenditure and intake targets.

use super::common::{Outcome, finite, fixed, money_grouped, plain, round_nearest};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::chart::palette;
use crate::models::{CalculationResult, ChartDataPoint};

const KG_PER_LB: f64 = 0.453592;
const CM_PER_INCH: f64 = 2.54;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("bmi", bmi);
    table.pure("bmr", bmr);
    table.pure("water-intake", water_intake);
    table.pure("body-fat", body_fat);
    table.pure("ideal-weight", ideal_weight);
    table.pure("macros", macros);
    table.pure("hr-max", max_heart_rate);
    table.pure("bac", blood_alcohol);
    table.pure("calorie-deficit", calorie_deficit);
    table.pure("sleep", sleep);
    table.pure("waist-hip", waist_hip);
    table.pure("protein", protein);
    table.pure("smoking-cost", smoking_cost);
    table.pure("pregnancy", pregnancy);
    table.pure("step-convert", step_convert);
}

fn is_male(inputs: &Inputs<'_>) -> bool {
    inputs.text("gender") == "Male"
}

fn height_inches(inputs: &Inputs<'_>) -> f64 {
    inputs.number("height_ft") * 12.0 + inputs.number("height_in")
}

/// WHO adult BMI bands.
fn bmi_category(bmi: f64) -> &'static str {
    if bmi >= 30.0 {
        "Obese"
    } else if bmi >= 25.0 {
        "Overweight"
    } else if bmi < 18.5 {
        "Underweight"
    } else {
        "Normal"
    }
}

fn bmi(inputs: &Inputs<'_>) -> Outcome {
    let pounds = inputs.number("weight");
    let inches = height_inches(inputs);

    if inches == 0.0 {
        return Ok(CalculationResult::new("0", "Invalid Height"));
    }

    let bmi = 703.0 * (pounds / (inches * inches));

    Ok(CalculationResult::new(fixed(bmi, 1)?, "BMI")
        .with_details(format!("Category: {}", bmi_category(bmi)))
        .with_steps(["703 * W / H²"]))
}

/// Activity multiplier applied to BMR. Later matches take precedence.
fn activity_factor(activity: &str) -> f64 {
    let mut factor = 1.2;
    if activity.contains("Light") {
        factor = 1.375;
    }
    if activity.contains("Mod") {
        factor = 1.55;
    }
    if activity.contains("Very") {
        factor = 1.725;
    }
    if activity.contains("Super") {
        factor = 1.9;
    }
    factor
}

/// Mifflin-St Jeor resting energy with an activity multiplier.
fn bmr(inputs: &Inputs<'_>) -> Outcome {
    let kg = inputs.number("weight") * KG_PER_LB;
    let cm = height_inches(inputs) * CM_PER_INCH;
    let age = inputs.number("age");
    let sex_offset = if is_male(inputs) { 5.0 } else { -161.0 };

    let bmr = 10.0 * kg + 6.25 * cm - 5.0 * age + sex_offset;
    let factor = activity_factor(inputs.text("activity"));
    let tdee = round_nearest(bmr * factor);

    Ok(CalculationResult::new(plain(tdee)?, "Calories/Day (TDEE)")
        .with_details(format!(
            "BMR: {} calories (Resting)",
            plain(round_nearest(bmr))?
        ))
        .with_steps([
            "BMR Formula: Mifflin-St Jeor".to_string(),
            format!("Activity Factor: {}x", plain(factor)?),
        ])
        .with_chart(vec![
            ChartDataPoint::new("BMR", bmr, palette::PRIMARY),
            ChartDataPoint::new("Activity Burn", tdee - bmr, palette::SECONDARY),
        ]))
}

fn water_intake(inputs: &Inputs<'_>) -> Outcome {
    let ounces = inputs.number("weight") * 0.5;

    Ok(
        CalculationResult::new(format!("{} oz", fixed(ounces, 1)?), "Daily Water")
            .with_details("Approx 0.5oz per lb body weight."),
    )
}

/// U.S. Navy circumference method, inches.
fn body_fat(inputs: &Inputs<'_>) -> Outcome {
    let waist = inputs.number("waist");
    let neck = inputs.number("neck");
    let height = inputs.number("height");
    let hip = inputs.number("hip");

    let percent = if is_male(inputs) {
        86.010 * (waist - neck).log10() - 70.041 * height.log10() + 36.76
    } else {
        163.205 * (waist + hip - neck).log10() - 97.684 * height.log10() - 78.387
    };

    Ok(
        CalculationResult::new(format!("{}%", fixed(percent, 1)?), "Body Fat Percentage")
            .with_details("US Navy Method Estimate"),
    )
}

/// Robinson (1983): a base weight at five feet plus a per-inch increment.
fn ideal_weight(inputs: &Inputs<'_>) -> Outcome {
    let inches = height_inches(inputs);
    let (base, per_inch) = if is_male(inputs) { (52.0, 1.9) } else { (49.0, 1.7) };
    let kg = base + per_inch * (inches - 60.0);

    Ok(
        CalculationResult::new(format!("{} kg", fixed(kg, 1)?), "Ideal Weight").with_details(
            format!("Approx {} lbs (Robinson Formula)", fixed(kg * 2.2, 1)?),
        ),
    )
}

fn macros(inputs: &Inputs<'_>) -> Outcome {
    let calories = inputs.number("cals");
    let (protein, fat, carbs) = match inputs.text("goal") {
        "Cutting" => (0.4, 0.4, 0.2),
        "Bulking" => (0.3, 0.25, 0.45),
        _ => (0.3, 0.35, 0.35),
    };

    // 4 kcal per gram of protein and carbohydrate, 9 per gram of fat.
    Ok(CalculationResult::new(
        format!("{}g P", plain(round_nearest(calories * protein / 4.0))?),
        "Protein Target",
    )
    .with_details(format!(
        "{}g Carbs, {}g Fat",
        plain(round_nearest(calories * carbs / 4.0))?,
        plain(round_nearest(calories * fat / 9.0))?
    ))
    .with_chart(vec![
        ChartDataPoint::new("Protein", protein, palette::PRIMARY),
        ChartDataPoint::new("Carbs", carbs, palette::SECONDARY),
        ChartDataPoint::new("Fat", fat, palette::ACCENT_1),
    ]))
}

fn max_heart_rate(inputs: &Inputs<'_>) -> Outcome {
    let max = 220.0 - inputs.number("age");

    Ok(
        CalculationResult::new(format!("{} bpm", plain(max)?), "Max Heart Rate").with_details(
            format!(
                "Zone 2 (Fat Burn): {}-{} bpm",
                plain(round_nearest(max * 0.6))?,
                plain(round_nearest(max * 0.7))?
            ),
        ),
    )
}

/// Widmark estimate with 14 g of alcohol per standard drink.
fn blood_alcohol(inputs: &Inputs<'_>) -> Outcome {
    let grams = inputs.number("drinks") * 14.0;
    let body_grams = inputs.number("weight") * 453.592;
    let distribution = if is_male(inputs) { 0.68 } else { 0.55 };

    let bac = finite(grams / (body_grams * distribution) * 100.0 - 0.015 * inputs.number("hours"))?;
    let verdict = if bac > 0.08 {
        "Legally Intoxicated (US)"
    } else {
        "Within Legal Limits"
    };

    Ok(
        CalculationResult::new(format!("{}%", fixed(bac.max(0.0), 3)?), "BAC Estimate")
            .with_details(verdict),
    )
}

/// 3500 kcal per pound of body fat.
fn calorie_deficit(inputs: &Inputs<'_>) -> Outcome {
    let deficit = inputs.number("maintenance") - inputs.number("intake");
    let days = inputs.number("goal_loss") * 3500.0 / deficit;

    Ok(
        CalculationResult::new(format!("{} Days", plain(days.ceil())?), "To Reach Goal")
            .with_details(format!("Deficit: {} cal/day", plain(deficit)?)),
    )
}

fn sleep(_: &Inputs<'_>) -> Outcome {
    Ok(CalculationResult::new("Calculating...", "Cycles").with_details("Aim for 5-6 cycles (90m each)."))
}

fn waist_hip(inputs: &Inputs<'_>) -> Outcome {
    let ratio = inputs.number("waist") / inputs.number("hip");
    let risk = if ratio > 0.85 { "High Risk" } else { "Healthy Range" };

    Ok(CalculationResult::new(fixed(ratio, 2)?, "Ratio").with_details(risk))
}

fn protein(inputs: &Inputs<'_>) -> Outcome {
    let per_pound = if inputs.text("activity") == "Athlete" { 0.8 } else { 0.5 };
    let grams = inputs.number("weight") * per_pound;

    Ok(
        CalculationResult::new(format!("{}g", plain(round_nearest(grams))?), "Daily Protein")
            .with_details("Based on activity level"),
    )
}

fn smoking_cost(inputs: &Inputs<'_>) -> Outcome {
    let cost =
        inputs.number("packs") * inputs.number("price") * 365.0 * inputs.number("years");

    Ok(CalculationResult::new(money_grouped(cost, 3)?, "Total Cost").with_details("Money burned."))
}

fn pregnancy(_: &Inputs<'_>) -> Outcome {
    Ok(CalculationResult::new("Coming Soon", "Date").with_details("Add 280 days to LMP."))
}

/// Stride is taken as 0.413 of height; 63,360 inches to the mile.
fn step_convert(inputs: &Inputs<'_>) -> Outcome {
    let miles = inputs.number("steps") * inputs.number("height") * 0.413 / 63_360.0;

    Ok(
        CalculationResult::new(format!("{} Miles", fixed(miles, 2)?), "Distance Walked")
            .with_details("Based on stride length estimate."),
    )
}
