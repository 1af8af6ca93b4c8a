//! Per-game and per-season statistics.

use super::common::{Outcome, fixed, plain, round_nearest};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::CalculationResult;

/// Ceiling of each NFL passer rating component.
const PASSER_COMPONENT_MAX: f64 = 2.375;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("running-pace", running_pace);
    table.pure("era", era);
    table.pure("qb-rating", qb_rating);
    table.pure("one-rep-max", one_rep_max);
    table.pure("cricket-nrr", net_run_rate);
    table.pure("basketball-per", basketball_efficiency);
    table.pure("slugging", slugging);
    table.pure("batting-avg", batting_average);
    table.pure("golf-handicap", golf_differential);
    table.pure("field-goal", field_goal);
}

/// Minutes per mile as `m:ss`. Seconds are rounded first, so a pace of
/// 7:59.7 reads `8:00`.
fn running_pace(inputs: &Inputs<'_>) -> Outcome {
    let minutes = inputs.number("time_min") + inputs.number("time_sec") / 60.0;
    let pace_seconds = round_nearest(minutes / inputs.number("distance") * 60.0);

    let whole_minutes = (pace_seconds / 60.0).floor();
    let seconds = pace_seconds - whole_minutes * 60.0;

    Ok(CalculationResult::new(
        format!("{}:{:0>2}", plain(whole_minutes)?, plain(seconds)?),
        "/ mile",
    )
    .with_details("Average Pace"))
}

fn era(inputs: &Inputs<'_>) -> Outcome {
    let era = 9.0 * inputs.number("runs") / inputs.number("innings");

    Ok(CalculationResult::new(fixed(era, 2)?, "ERA"))
}

fn passer_component(value: f64) -> f64 {
    value.clamp(0.0, PASSER_COMPONENT_MAX)
}

/// NFL passer rating, 0 to 158.3.
fn qb_rating(inputs: &Inputs<'_>) -> Outcome {
    let attempts = inputs.number("att");

    let completion = passer_component((inputs.number("comp") / attempts - 0.3) * 5.0);
    let yardage = passer_component((inputs.number("yds") / attempts - 3.0) * 0.25);
    let touchdowns = passer_component(inputs.number("td") / attempts * 20.0);
    let interceptions =
        passer_component(PASSER_COMPONENT_MAX - inputs.number("int") / attempts * 25.0);

    let rating = (completion + yardage + touchdowns + interceptions) / 6.0 * 100.0;

    Ok(CalculationResult::new(fixed(rating, 1)?, "Passer Rating").with_details("NFL Formula"))
}

fn one_rep_max(inputs: &Inputs<'_>) -> Outcome {
    let max = inputs.number("weight") * (1.0 + inputs.number("reps") / 30.0);

    Ok(CalculationResult::new(plain(round_nearest(max))?, "Lbs").with_details("Epley Formula"))
}

fn net_run_rate(inputs: &Inputs<'_>) -> Outcome {
    let scored = inputs.number("runs_scored") / inputs.number("overs_faced");
    let conceded = inputs.number("runs_conceded") / inputs.number("overs_bowled");

    Ok(CalculationResult::new(fixed(scored - conceded, 3)?, "NRR").with_details("Net Run Rate"))
}

fn basketball_efficiency(inputs: &Inputs<'_>) -> Outcome {
    let positive = ["pts", "reb", "ast", "stl", "blk"]
        .iter()
        .map(|name| inputs.number(name))
        .sum::<f64>();
    let negative = ["missed_fg", "missed_ft", "to"]
        .iter()
        .map(|name| inputs.number(name))
        .sum::<f64>();
    let efficiency = (positive - negative) / inputs.number("gp");

    Ok(CalculationResult::new(fixed(efficiency, 1)?, "Eff Rating")
        .with_details("Simple Efficiency"))
}

fn slugging(inputs: &Inputs<'_>) -> Outcome {
    let total_bases = inputs.number("s")
        + 2.0 * inputs.number("d")
        + 3.0 * inputs.number("t")
        + 4.0 * inputs.number("hr");

    Ok(CalculationResult::new(fixed(total_bases / inputs.number("ab"), 3)?, "SLG"))
}

fn batting_average(inputs: &Inputs<'_>) -> Outcome {
    let average = inputs.number("hits") / inputs.number("ab");

    Ok(CalculationResult::new(fixed(average, 3)?, "AVG"))
}

/// Score differential on a course of standard slope 113.
fn golf_differential(inputs: &Inputs<'_>) -> Outcome {
    let differential =
        (inputs.number("score") - inputs.number("rating")) * 113.0 / inputs.number("slope");

    Ok(CalculationResult::new(fixed(differential, 1)?, "Differential"))
}

fn field_goal(inputs: &Inputs<'_>) -> Outcome {
    let percent = inputs.number("made") / inputs.number("att") * 100.0;

    Ok(CalculationResult::new(fixed(percent, 1)?, "%").with_details("Success Rate"))
}
