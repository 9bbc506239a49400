use serde::{Deserialize, Serialize};

use crate::core::{SeriesKey, format_number};
use crate::render::{Color, Renderer};

use super::ProductionChart;

/// One series line of the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub key: SeriesKey,
    pub label: String,
    pub color: Color,
    pub value: f64,
    pub display: String,
}

/// Overlay payload for the hovered index.
///
/// `anchor_x`/`anchor_y` locate the hovered point; `left_px` is the tooltip's
/// left edge after keeping it inside the plot's horizontal padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub period: String,
    pub rows: [TooltipRow; 3],
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub left_px: f64,
}

impl Tooltip {
    /// Left edge as a fraction of the full chart width, for percentage
    /// positioning of HTML overlays.
    #[must_use]
    pub fn left_fraction(&self, chart_width: f64) -> f64 {
        if chart_width > 0.0 {
            self.left_px / chart_width
        } else {
            0.0
        }
    }
}

impl<R: Renderer> ProductionChart<R> {
    /// Tooltip for the current hover index, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let index = self.hover.index()?;
        let point = self.data.get(index)?;
        let scale = self.scale();
        let layout = self.config.layout;
        let placement = self.config.tooltip;

        let anchor_x = scale.x_for_index(index);
        let top_y = self
            .config
            .series
            .iter()
            .map(|descriptor| scale.y_for_value(descriptor.key.value_of(point)))
            .fold(f64::INFINITY, f64::min);
        let anchor_y = (top_y - placement.lift).max(0.0);

        // Left limit wins when the plot is narrower than the tooltip.
        let left_limit = layout.padding_left + placement.edge_inset;
        let right_limit =
            layout.width() - layout.padding_right - placement.edge_inset - placement.width;
        let left_px = if anchor_x < left_limit {
            left_limit
        } else if anchor_x > right_limit {
            right_limit
        } else {
            anchor_x
        };

        let rows = self.config.series.clone().map(|descriptor| {
            let value = descriptor.key.value_of(point);
            TooltipRow {
                key: descriptor.key,
                label: descriptor.label,
                color: descriptor.color,
                value,
                display: format_number(value),
            }
        });

        Some(Tooltip {
            index,
            period: point.period.clone(),
            rows,
            anchor_x,
            anchor_y,
            left_px,
        })
    }
}
