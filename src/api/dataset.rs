use serde::{Deserialize, Serialize};

use crate::core::ChartDataPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Legend entry shown next to the panel title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
}

/// Production panel payload as delivered by the dashboard data layer.
///
/// `value` is pre-formatted display text; the chart only reads `chart_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionData {
    pub title: String,
    pub value: String,
    pub unit: String,
    #[serde(default)]
    pub legend_items: Vec<LegendItem>,
    #[serde(default)]
    pub chart_data: Option<Vec<ChartDataPoint>>,
}

impl ProductionData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse production data: {e}")))
    }

    /// Chart data of the panel, or the quarterly default set when absent.
    #[must_use]
    pub fn chart_data_or_default(&self) -> Vec<ChartDataPoint> {
        self.chart_data
            .clone()
            .unwrap_or_else(default_quarterly_chart_data)
    }
}

/// Quarterly fallback data shown when a panel carries no chart data.
#[must_use]
pub fn default_quarterly_chart_data() -> Vec<ChartDataPoint> {
    vec![
        ChartDataPoint::new("Q1", 4950.0, 5150.0, 5350.0),
        ChartDataPoint::new("Q2", 5600.0, 5280.0, 5440.0),
        ChartDataPoint::new("Q3", 3500.0, 5070.0, 4890.0),
        ChartDataPoint::new("Q4", 5221.0, 5400.0, 5042.0),
    ]
}
