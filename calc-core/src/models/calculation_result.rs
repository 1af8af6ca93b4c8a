use serde::{Deserialize, Serialize};

use super::chart::{ChartDataPoint, MIN_TREND_POINTS, TrendDataPoint};

/// Everything a caller needs to display one calculation.
///
/// The engine owns formatting: `result` is display text (currency symbol,
/// rounding and unit suffix already applied), never a raw number. A result
/// is produced fresh for every call and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Primary headline value.
    pub result: String,

    /// Secondary label describing what `result` means. May be empty.
    #[serde(default)]
    pub unit: String,

    /// One-line explanation. May be empty.
    #[serde(default)]
    pub details: String,

    /// Intermediate quantities, in the order they were derived.
    #[serde(default)]
    pub steps: Vec<String>,

    /// Categorical breakdown of one total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartDataPoint>>,

    /// Stacked per-period breakdown. Never holds fewer than two points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_data: Option<Vec<TrendDataPoint>>,
}

impl CalculationResult {
    pub fn new(
        result: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            result: result.into(),
            unit: unit.into(),
            details: String::new(),
            steps: Vec::new(),
            chart_data: None,
            trend_data: None,
        }
    }

    pub fn with_details(
        mut self,
        details: impl Into<String>,
    ) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_steps<I, S>(
        mut self,
        steps: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_chart(
        mut self,
        chart: Vec<ChartDataPoint>,
    ) -> Self {
        self.chart_data = Some(chart);
        self
    }

    /// Attaches a series, or drops it when it is too short to chart.
    pub fn with_trend(
        mut self,
        trend: Vec<TrendDataPoint>,
    ) -> Self {
        self.trend_data = (trend.len() >= MIN_TREND_POINTS).then_some(trend);
        self
    }

    /// Outcome for an id with no registered formula.
    pub fn coming_soon() -> Self {
        Self::new("...", "Coming Soon").with_details("This calculator is being updated.")
    }

    /// Outcome for inputs that make the formula undefined.
    pub fn invalid_inputs() -> Self {
        Self::new("Error", "").with_details("Invalid inputs.")
    }

    /// Whether every chart and trend value is a finite number.
    pub fn is_chartable(&self) -> bool {
        let chart_ok = self
            .chart_data
            .iter()
            .flatten()
            .all(|p| p.value.is_finite());
        let trend_ok = self
            .trend_data
            .iter()
            .flatten()
            .all(|p| p.primary.is_finite() && p.secondary.is_none_or(f64::is_finite));
        chart_ok && trend_ok
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::chart::palette;

    #[test]
    fn builder_sets_every_field() {
        let result = CalculationResult::new("$30.00", "Per Person")
            .with_details("Split 4 ways")
            .with_steps(["Bill: $100", "Tip: 20%"])
            .with_chart(vec![ChartDataPoint::new("Bill", 100.0, palette::PRIMARY)]);

        assert_eq!(result.result, "$30.00");
        assert_eq!(result.unit, "Per Person");
        assert_eq!(result.details, "Split 4 ways");
        assert_eq!(result.steps, vec!["Bill: $100", "Tip: 20%"]);
        assert_eq!(result.chart_data.map(|c| c.len()), Some(1));
        assert_eq!(result.trend_data, None);
    }

    #[test]
    fn single_point_trend_is_dropped() {
        let result = CalculationResult::new("1", "")
            .with_trend(vec![TrendDataPoint::stacked("Yr 1", 1.0, 2.0)]);

        assert_eq!(result.trend_data, None);
    }

    #[test]
    fn two_point_trend_is_kept() {
        let result = CalculationResult::new("1", "").with_trend(vec![
            TrendDataPoint::stacked("Yr 1", 1.0, 2.0),
            TrendDataPoint::stacked("Yr 2", 3.0, 4.0),
        ]);

        assert_eq!(result.trend_data.map(|t| t.len()), Some(2));
    }

    #[test]
    fn coming_soon_has_no_steps() {
        let result = CalculationResult::coming_soon();

        assert_eq!(result.result, "...");
        assert_eq!(result.unit, "Coming Soon");
        assert!(result.steps.is_empty());
    }

    #[test]
    fn invalid_inputs_reports_generic_error() {
        let result = CalculationResult::invalid_inputs();

        assert_eq!(result.result, "Error");
        assert_eq!(result.details, "Invalid inputs.");
        assert!(result.steps.is_empty());
    }

    #[test]
    fn non_finite_trend_is_not_chartable() {
        let result = CalculationResult::new("1", "").with_trend(vec![
            TrendDataPoint::stacked("Yr 1", 1.0, f64::NAN),
            TrendDataPoint::stacked("Yr 2", 3.0, 4.0),
        ]);

        assert!(!result.is_chartable());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = CalculationResult::new("1", "u").with_chart(vec![]);

        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("chartData").is_some());
        assert!(json.get("trendData").is_none());
    }
}
