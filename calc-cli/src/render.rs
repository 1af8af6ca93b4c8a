//! Plain-text rendering of calculation results for the terminal.

use calc_core::models::chart::{compact_currency, shares, trend_scale_max};
use calc_core::{CalculationResult, ChartDataPoint, TrendDataPoint};
use calc_data::BatchOutcome;

/// Headline, details, steps, then the chart and trend tables when present.
pub fn result_text(result: &CalculationResult) -> String {
    let mut lines = vec![headline(&result.result, &result.unit)];

    if !result.details.is_empty() {
        lines.push(result.details.clone());
    }

    if !result.steps.is_empty() {
        lines.push(String::new());
        lines.push("Steps:".to_string());
        lines.extend(result.steps.iter().map(|step| format!("  {step}")));
    }

    if let Some(points) = &result.chart_data {
        lines.push(String::new());
        lines.push("Breakdown:".to_string());
        lines.extend(breakdown_lines(points));
    }

    if let Some(points) = &result.trend_data {
        lines.push(String::new());
        lines.push(format!("Trend (peak {}):", compact_currency(trend_scale_max(points))));
        lines.extend(trend_lines(points));
    }

    lines.join("\n")
}

fn headline(
    result: &str,
    unit: &str,
) -> String {
    if unit.is_empty() {
        result.to_string()
    } else {
        format!("{result}  {unit}")
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

fn breakdown_lines(points: &[ChartDataPoint]) -> Vec<String> {
    let width = label_width(points.iter().map(|p| p.label.as_str()));

    points
        .iter()
        .zip(shares(points))
        .map(|(point, share)| {
            format!(
                "  {:<width$}  {:>12.2}  {:>5.1}%",
                point.label,
                point.value,
                share * 100.0
            )
        })
        .collect()
}

fn trend_lines(points: &[TrendDataPoint]) -> Vec<String> {
    let width = label_width(points.iter().map(|p| p.label.as_str()));

    points
        .iter()
        .map(|point| {
            let secondary = point.secondary.map(compact_currency).unwrap_or_default();
            format!(
                "  {:<width$}  {:>8}  {:>8}",
                point.label,
                compact_currency(point.primary),
                secondary
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

/// One line per outcome: row, calculator id, then the headline.
pub fn batch_table(outcomes: &[BatchOutcome]) -> String {
    let width = label_width(outcomes.iter().map(|o| o.calculator.as_str()));

    outcomes
        .iter()
        .map(|outcome| {
            format!(
                "{:>4}  {:<width$}  {}",
                outcome.row,
                outcome.calculator,
                headline(&outcome.result.result, &outcome.result.unit)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use calc_core::models::chart::palette;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn headline_only() {
        let result = CalculationResult::new("$30.00", "Per Person");

        assert_eq!(result_text(&result), "$30.00  Per Person");
    }

    #[test]
    fn empty_unit_is_not_padded() {
        let result = CalculationResult::new("212.0 °F", "");

        assert_eq!(result_text(&result), "212.0 °F");
    }

    #[test]
    fn details_and_steps() {
        let result = CalculationResult::new("23.6", "BMI")
            .with_details("Category: Normal")
            .with_steps(["703 * W / H²"]);

        assert_eq!(
            result_text(&result),
            "23.6  BMI\nCategory: Normal\n\nSteps:\n  703 * W / H²"
        );
    }

    #[test]
    fn breakdown_shows_shares() {
        let result = CalculationResult::new("$1.00", "").with_chart(vec![
            ChartDataPoint::new("Principal", 30_000.0, palette::PRIMARY),
            ChartDataPoint::new("Interest", 10_000.0, palette::SECONDARY),
        ]);

        let text = result_text(&result);

        assert!(text.contains("Breakdown:\n"));
        assert!(text.contains("  Principal      30000.00   75.0%"));
        assert!(text.contains("  Interest       10000.00   25.0%"));
    }

    #[test]
    fn trend_uses_compact_currency() {
        let result = CalculationResult::new("$1.00", "").with_trend(vec![
            TrendDataPoint::stacked("Yr 1", 6_000.0, 1_500.0),
            TrendDataPoint::stacked("Yr 2", 6_400.0, 1_100.0),
        ]);

        let text = result_text(&result);

        assert!(text.contains("Trend (peak $8k):"));
        assert!(text.contains("  Yr 1       $6k       $2k"));
    }

    #[test]
    fn batch_table_aligns_ids() {
        let outcomes = vec![
            BatchOutcome {
                row: 1,
                calculator: "tip".to_string(),
                result: CalculationResult::new("$30.00", "Per Person"),
            },
            BatchOutcome {
                row: 2,
                calculator: "quadratic".to_string(),
                result: CalculationResult::new("x = 2.00", "or 1.00"),
            },
        ];

        assert_eq!(
            batch_table(&outcomes),
            "   1  tip        $30.00  Per Person\n   2  quadratic  x = 2.00  or 1.00"
        );
    }
}
