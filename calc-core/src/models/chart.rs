//! Chart-ready output carried by a [`CalculationResult`](super::CalculationResult).
//!
//! Nothing here renders anything. These types and helpers define the data
//! contract a donut chart (categorical breakdown) or a stacked area chart
//! (time series) consumes.

use serde::{Deserialize, Serialize};

/// Fixed high-contrast palette used by the handlers.
pub mod palette {
    pub const PRIMARY: &str = "#000000";
    pub const SECONDARY: &str = "#ffffff";
    pub const ACCENT_1: &str = "#404040";
    pub const ACCENT_2: &str = "#737373";
    pub const ACCENT_3: &str = "#a3a3a3";
}

/// One slice of a categorical breakdown of a single total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl ChartDataPoint {
    /// Negative values are clamped to zero: slices are magnitudes. NaN is
    /// kept so the engine can reject it.
    pub fn new(
        label: impl Into<String>,
        value: f64,
        color: &str,
    ) -> Self {
        Self {
            label: label.into(),
            value: if value < 0.0 { 0.0 } else { value },
            color: color.to_string(),
        }
    }
}

/// One point of a time-ordered series. `primary` and `secondary` stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub label: String,
    pub primary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}

impl TrendDataPoint {
    pub fn stacked(
        label: impl Into<String>,
        primary: f64,
        secondary: f64,
    ) -> Self {
        Self {
            label: label.into(),
            primary,
            secondary: Some(secondary),
        }
    }

    /// Height of this point once both series are stacked.
    pub fn total(&self) -> f64 {
        self.primary + self.secondary.unwrap_or(0.0)
    }
}

/// Minimum number of points a series needs to be charted.
pub const MIN_TREND_POINTS: usize = 2;

/// Each slice's share of the total, in input order.
///
/// A single slice is a full circle. When every value is zero all shares are
/// zero rather than NaN.
pub fn shares(points: &[ChartDataPoint]) -> Vec<f64> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    points
        .iter()
        .map(|p| if total > 0.0 { p.value / total } else { 0.0 })
        .collect()
}

/// Upper bound of the value axis: the tallest stacked point, or zero for an
/// empty series.
pub fn trend_scale_max(points: &[TrendDataPoint]) -> f64 {
    points.iter().map(TrendDataPoint::total).fold(0.0, f64::max)
}

/// Short currency label for a chart axis or tooltip.
pub fn compact_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}k", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_clamps_negative_values() {
        let point = ChartDataPoint::new("Profit", -25.0, palette::SECONDARY);

        assert_eq!(point.value, 0.0);
    }

    #[test]
    fn new_keeps_nan() {
        let point = ChartDataPoint::new("Interest", f64::NAN, palette::SECONDARY);

        assert!(point.value.is_nan());
    }

    #[test]
    fn shares_sum_to_one() {
        let points = vec![
            ChartDataPoint::new("Principal", 30_000.0, palette::PRIMARY),
            ChartDataPoint::new("Interest", 10_000.0, palette::SECONDARY),
        ];

        let shares = shares(&points);

        assert_relative_eq!(shares[0], 0.75);
        assert_relative_eq!(shares[1], 0.25);
    }

    #[test]
    fn single_slice_is_full_circle() {
        let points = vec![ChartDataPoint::new("Only", 12.0, palette::PRIMARY)];

        assert_eq!(shares(&points), vec![1.0]);
    }

    #[test]
    fn all_zero_slices_have_zero_share() {
        let points = vec![
            ChartDataPoint::new("A", 0.0, palette::PRIMARY),
            ChartDataPoint::new("B", 0.0, palette::SECONDARY),
        ];

        assert_eq!(shares(&points), vec![0.0, 0.0]);
    }

    #[test]
    fn scale_max_uses_stacked_height() {
        let points = vec![
            TrendDataPoint::stacked("Yr 1", 100.0, 50.0),
            TrendDataPoint::stacked("Yr 2", 120.0, 10.0),
            TrendDataPoint {
                label: "Yr 3".to_string(),
                primary: 140.0,
                secondary: None,
            },
        ];

        assert_eq!(trend_scale_max(&points), 150.0);
    }

    #[test]
    fn scale_max_of_empty_series_is_zero() {
        assert_eq!(trend_scale_max(&[]), 0.0);
    }

    #[test]
    fn compact_currency_picks_magnitude_suffix() {
        assert_eq!(compact_currency(2_345_678.0), "$2.35M");
        assert_eq!(compact_currency(12_400.0), "$12k");
        assert_eq!(compact_currency(640.0), "$640");
    }

    #[test]
    fn trend_point_omits_missing_secondary_in_json() {
        let point = TrendDataPoint {
            label: "Mo 12".to_string(),
            primary: 1.5,
            secondary: None,
        };

        let json = serde_json::to_string(&point).unwrap();

        assert_eq!(json, r#"{"label":"Mo 12","primary":1.5}"#);
    }
}
