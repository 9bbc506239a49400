use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{ChartDataPoint, PlotLayout, SeriesKey, hit_test};

/// Bound on `|value / max|`. Values far below zero relative to a tiny max
/// would otherwise overflow to infinite pixel coordinates.
pub const MAX_VALUE_RATIO: f64 = 1.0e9;

/// Data-to-pixel mapping for one render of the production chart.
///
/// Built fresh from the full data sequence on every render; it never caches
/// across data changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotScale {
    layout: PlotLayout,
    point_count: usize,
    max_value: Option<f64>,
}

impl PlotScale {
    #[must_use]
    pub fn from_data(layout: PlotLayout, data: &[ChartDataPoint]) -> Self {
        Self {
            layout,
            point_count: data.len(),
            max_value: max_series_value(data),
        }
    }

    #[must_use]
    pub fn layout(self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn point_count(self) -> usize {
        self.point_count
    }

    /// Largest finite value across all series, `None` for empty input.
    #[must_use]
    pub fn max_value(self) -> Option<f64> {
        self.max_value
    }

    /// `true` when no usable vertical scale exists and every value sits on
    /// the baseline.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !matches!(self.max_value, Some(max) if max > 0.0)
    }

    #[must_use]
    pub fn x_for_index(self, index: usize) -> f64 {
        if self.point_count <= 1 {
            return self.layout.center_x();
        }
        let t = index as f64 / (self.point_count - 1) as f64;
        self.layout.padding_left + t * self.layout.inner_width
    }

    #[must_use]
    pub fn y_for_value(self, value: f64) -> f64 {
        let baseline = self.layout.baseline_y();
        let max = match self.max_value {
            Some(max) if max > 0.0 => max,
            _ => return baseline,
        };
        if !value.is_finite() {
            return baseline;
        }
        let ratio = (value / max).clamp(-MAX_VALUE_RATIO, MAX_VALUE_RATIO);
        baseline - ratio * self.layout.inner_height
    }

    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.y_for_value(0.0)
    }

    /// Pixel x-positions of every data index, in order.
    pub fn x_positions(self) -> impl Iterator<Item = f64> {
        (0..self.point_count).map(move |index| self.x_for_index(index))
    }

    #[must_use]
    pub fn nearest_index(self, pointer_x: f64) -> Option<usize> {
        hit_test::nearest_index(self.x_positions(), pointer_x)
    }
}

fn max_series_value(data: &[ChartDataPoint]) -> Option<f64> {
    data.iter()
        .flat_map(|point| SeriesKey::ALL.map(|key| key.value_of(point)))
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(|max| max.0)
}
