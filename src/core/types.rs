use serde::{Deserialize, Serialize};

/// Logical outer size of the drawing surface, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One x-axis bucket of the production chart.
///
/// The sequence order is the x-axis order; `period` is only a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub period: String,
    pub actual: f64,
    pub baseline: f64,
    pub ghi_adjusted_baseline: f64,
}

impl ChartDataPoint {
    #[must_use]
    pub fn new(
        period: impl Into<String>,
        actual: f64,
        baseline: f64,
        ghi_adjusted_baseline: f64,
    ) -> Self {
        Self {
            period: period.into(),
            actual,
            baseline,
            ghi_adjusted_baseline,
        }
    }

    /// All three series values in `SeriesKey::ALL` order.
    #[must_use]
    pub fn values(&self) -> [f64; 3] {
        SeriesKey::ALL.map(|key| key.value_of(self))
    }

    /// Returns a copy with every series value multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            period: self.period.clone(),
            actual: self.actual * factor,
            baseline: self.baseline * factor,
            ghi_adjusted_baseline: self.ghi_adjusted_baseline * factor,
        }
    }
}

/// The three tracked quantities plotted against the shared period axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    Actual,
    Baseline,
    GhiAdjustedBaseline,
}

impl SeriesKey {
    /// Render order: later series are drawn on top.
    pub const ALL: [SeriesKey; 3] = [
        SeriesKey::Actual,
        SeriesKey::Baseline,
        SeriesKey::GhiAdjustedBaseline,
    ];

    #[must_use]
    pub fn value_of(self, point: &ChartDataPoint) -> f64 {
        match self {
            SeriesKey::Actual => point.actual,
            SeriesKey::Baseline => point.baseline,
            SeriesKey::GhiAdjustedBaseline => point.ghi_adjusted_baseline,
        }
    }

    /// Stable identifier, matching the dashboard's JSON field names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesKey::Actual => "actual",
            SeriesKey::Baseline => "baseline",
            SeriesKey::GhiAdjustedBaseline => "ghiAdjustedBaseline",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SeriesKey::Actual => 0,
            SeriesKey::Baseline => 1,
            SeriesKey::GhiAdjustedBaseline => 2,
        }
    }
}
