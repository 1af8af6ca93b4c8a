//! Material takeoffs for slabs, floors, walls and roofs.
//!
//! Count-style results (bags, gallons, sheets) are rounded up: a job never
//! buys a fraction of a unit.

use super::common::{CalculationError, Outcome, fixed, plain};
use super::engine::DispatchTable;
use super::inputs::{Inputs, parse_integer};
use crate::models::CalculationResult;

/// Bag size assumed when none is selected.
const DEFAULT_BAG_LBS: f64 = 80.0;

/// Cubic feet of mixed concrete from one 80 lb bag.
const CUBIC_FEET_PER_80LB_BAG: f64 = 0.6;

const SQFT_PER_GALLON: f64 = 350.0;
const SQFT_PER_DRYWALL_SHEET: f64 = 32.0;
const SQFT_PER_WALLPAPER_ROLL: f64 = 25.0;
const BTU_PER_SQFT: f64 = 20.0;
const INCHES_PER_STAIR_RISE: f64 = 7.5;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("concrete", concrete);
    table.pure("paint", paint);
    table.pure("tile", tile);
    table.pure("carpet", carpet);
    table.pure("mulch", bulk_volume);
    table.pure("gravel", bulk_volume);
    table.pure("drywall", drywall);
    table.pure("roof-pitch", roof_pitch);
    table.pure("board-foot", board_foot);
    table.pure("wallpaper", wallpaper);
    table.pure("btu", btu);
    table.pure("stairs", stairs);
}

/// `"<n> <noun>"` with `n` rounded up.
fn count(
    value: f64,
    noun: &str,
) -> Result<String, CalculationError> {
    Ok(format!("{} {noun}", plain(value.ceil())?))
}

fn concrete(inputs: &Inputs<'_>) -> Outcome {
    let length = inputs.number("length");
    let width = inputs.number("width");
    let depth_ft = inputs.number("depth") / 12.0;
    let quantity = inputs.number("quantity");
    let waste = inputs.number("waste");

    let cubic_feet = length * width * depth_ft * quantity * (1.0 + waste / 100.0);
    let cubic_yards = cubic_feet / 27.0;

    let bag_lbs = parse_integer(inputs.text("bag_size"))
        .filter(|lbs| *lbs != 0.0)
        .unwrap_or(DEFAULT_BAG_LBS);
    let yield_per_bag = bag_lbs / DEFAULT_BAG_LBS * CUBIC_FEET_PER_80LB_BAG;

    Ok(
        CalculationResult::new(
            count(cubic_feet / yield_per_bag, "Bags")?,
            format!("({} lb premix)", plain(bag_lbs)?),
        )
        .with_details(format!("Total Volume: {} Cu. Yards", fixed(cubic_yards, 2)?))
        .with_steps([
            format!(
                "Volume (inc {}% waste): {} cu ft",
                plain(waste)?,
                fixed(cubic_feet, 1)?
            ),
            format!("Area: {} sq ft", plain(length * width)?),
        ]),
    )
}

fn paint(inputs: &Inputs<'_>) -> Outcome {
    let gallons = inputs.number("sqft") / SQFT_PER_GALLON;

    Ok(CalculationResult::new(count(gallons, "Gallons")?, "Paint")
        .with_details("1 gal covers ~350 sq ft"))
}

fn tile(inputs: &Inputs<'_>) -> Outcome {
    let area = inputs.number("length") * inputs.number("width");
    let tile_width = inputs.number("tile_width");
    let tile_height = inputs.number("tile_height");
    let waste = inputs.number("waste");

    if tile_width == 0.0 || tile_height == 0.0 {
        return Ok(CalculationResult::new("0", "Check Inputs"));
    }

    let one_tile_sqft = tile_width * tile_height / 144.0;
    let tiles = (area / one_tile_sqft * (1.0 + waste / 100.0)).ceil();

    Ok(CalculationResult::new(
        format!("{} Tiles", plain(tiles)?),
        format!("Approx {} sq ft total", plain((tiles * one_tile_sqft).ceil())?),
    )
    .with_details(format!("Room Area: {} sq ft", plain(area)?))
    .with_steps([
        format!("Tile Area: {} sq ft", fixed(one_tile_sqft, 3)?),
        format!("Waste Factor: {}%", plain(waste)?),
    ]))
}

fn carpet(inputs: &Inputs<'_>) -> Outcome {
    let square_yards = inputs.number("length") * inputs.number("width") / 9.0;

    Ok(CalculationResult::new(count(square_yards, "Sq Yards")?, "Carpet"))
}

/// Loose fill (mulch, soil, gravel) by the cubic yard.
fn bulk_volume(inputs: &Inputs<'_>) -> Outcome {
    let depth_ft = inputs.number("depth") / 12.0;
    let cubic_feet = inputs.number("length") * inputs.number("width") * depth_ft;

    Ok(CalculationResult::new(
        format!("{} Cu. Yards", fixed(cubic_feet / 27.0, 2)?),
        "Volume",
    ))
}

fn drywall(inputs: &Inputs<'_>) -> Outcome {
    let sheets = inputs.number("sqft") / SQFT_PER_DRYWALL_SHEET;

    Ok(CalculationResult::new(count(sheets, "Sheets")?, "4x8 Panels")
        .with_details("Standard 32 sq ft sheets"))
}

fn roof_pitch(inputs: &Inputs<'_>) -> Outcome {
    let (rise, run) = (inputs.number("rise"), inputs.number("run"));
    let degrees = (rise / run).atan().to_degrees();

    Ok(CalculationResult::new(fixed(degrees, 1)?, "Degrees")
        .with_details(format!("Pitch: {}/{}", plain(rise)?, plain(run)?)))
}

fn board_foot(inputs: &Inputs<'_>) -> Outcome {
    let board_feet =
        inputs.number("thick") * inputs.number("width") * inputs.number("length") / 12.0;

    Ok(CalculationResult::new(fixed(board_feet, 2)?, "Board Feet").with_details("Volume"))
}

fn wallpaper(inputs: &Inputs<'_>) -> Outcome {
    let rolls = inputs.number("width") * inputs.number("height") / SQFT_PER_WALLPAPER_ROLL;

    Ok(CalculationResult::new(count(rolls, "Rolls")?, "Standard Rolls")
        .with_details("Approx 25 sq ft/roll usable"))
}

fn btu(inputs: &Inputs<'_>) -> Outcome {
    let btu = inputs.number("sqft") * BTU_PER_SQFT;

    Ok(CalculationResult::new(count(btu, "BTU")?, "Cooling Capacity")
        .with_details("Roughly 20 BTU per sq ft"))
}

fn stairs(inputs: &Inputs<'_>) -> Outcome {
    let steps = inputs.number("rise") / INCHES_PER_STAIR_RISE;

    Ok(CalculationResult::new(count(steps, "Steps")?, "Estimated")
        .with_details("Based on 7.5\" rise"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::RawInputs;

    fn run(
        handler: fn(&Inputs<'_>) -> Outcome,
        pairs: &[(&str, &str)],
    ) -> CalculationResult {
        let raw: RawInputs = pairs.iter().copied().collect();
        handler(&Inputs::new(&raw)).unwrap()
    }

    // =========================================================================
    // Concrete tests
    // =========================================================================

    const SLAB: [(&str, &str); 5] = [
        ("length", "10"),
        ("width", "10"),
        ("depth", "4"),
        ("quantity", "1"),
        ("waste", "10"),
    ];

    #[test]
    fn concrete_slab_with_default_bag() {
        let result = run(concrete, &SLAB);

        assert_eq!(result.result, "62 Bags");
        assert_eq!(result.unit, "(80 lb premix)");
        assert_eq!(result.details, "Total Volume: 1.36 Cu. Yards");
        assert_eq!(
            result.steps,
            vec!["Volume (inc 10% waste): 36.7 cu ft", "Area: 100 sq ft"]
        );
    }

    #[test]
    fn smaller_bags_need_more_of_them() {
        let mut pairs = SLAB.to_vec();
        pairs.push(("bag_size", "60 lb"));

        let result = run(concrete, &pairs);

        assert_eq!(result.result, "82 Bags");
        assert_eq!(result.unit, "(60 lb premix)");
    }

    #[test]
    fn unparseable_bag_size_falls_back_to_80() {
        let mut pairs = SLAB.to_vec();
        pairs.push(("bag_size", "jumbo"));

        assert_eq!(run(concrete, &pairs).unit, "(80 lb premix)");
    }

    #[test]
    fn concrete_without_quantity_needs_no_bags() {
        let result = run(concrete, &[("length", "10"), ("width", "10"), ("depth", "4")]);

        assert_eq!(result.result, "0 Bags");
    }

    // =========================================================================
    // Tile tests
    // =========================================================================

    #[test]
    fn tile_count_includes_waste() {
        let result = run(
            tile,
            &[
                ("length", "10"),
                ("width", "12"),
                ("tile_width", "12"),
                ("tile_height", "12"),
                ("waste", "15"),
            ],
        );

        assert_eq!(result.result, "138 Tiles");
        assert_eq!(result.unit, "Approx 138 sq ft total");
        assert_eq!(result.details, "Room Area: 120 sq ft");
        assert_eq!(result.steps, vec!["Tile Area: 1.000 sq ft", "Waste Factor: 15%"]);
    }

    #[test]
    fn zero_tile_dimension_asks_for_inputs() {
        let result = run(tile, &[("length", "10"), ("width", "12"), ("tile_width", "12")]);

        assert_eq!(result.result, "0");
        assert_eq!(result.unit, "Check Inputs");
        assert!(result.steps.is_empty());
    }

    // =========================================================================
    // Simple takeoff tests
    // =========================================================================

    #[test]
    fn counts_round_up() {
        assert_eq!(run(paint, &[("sqft", "351")]).result, "2 Gallons");
        assert_eq!(run(drywall, &[("sqft", "64")]).result, "2 Sheets");
        assert_eq!(run(carpet, &[("length", "10"), ("width", "10")]).result, "12 Sq Yards");
        assert_eq!(run(stairs, &[("rise", "100")]).result, "14 Steps");
        assert_eq!(run(btu, &[("sqft", "250")]).result, "5000 BTU");
    }

    #[test]
    fn empty_area_counts_zero() {
        assert_eq!(run(paint, &[]).result, "0 Gallons");
    }

    #[test]
    fn mulch_and_gravel_share_a_formula() {
        let pairs = [("length", "27"), ("width", "4"), ("depth", "3")];

        assert_eq!(run(bulk_volume, &pairs).result, "1.00 Cu. Yards");
    }

    #[test]
    fn roof_pitch_in_degrees() {
        let result = run(roof_pitch, &[("rise", "6"), ("run", "12")]);

        assert_eq!(result.result, "26.6");
        assert_eq!(result.details, "Pitch: 6/12");
    }

    #[test]
    fn vertical_roof_is_ninety_degrees() {
        assert_eq!(run(roof_pitch, &[("rise", "6")]).result, "90.0");
    }

    #[test]
    fn board_feet_of_two_by_four() {
        let result = run(board_foot, &[("thick", "2"), ("width", "4"), ("length", "12")]);

        assert_eq!(result.result, "8.00");
    }
}
