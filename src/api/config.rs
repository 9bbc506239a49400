use serde::{Deserialize, Serialize};

use crate::core::PlotLayout;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::series::{SeriesDescriptor, default_series, validate_series};

/// Stroke and fill of the series paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub line_width: f64,
    pub fill_top_opacity: f64,
    pub fill_bottom_opacity: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            fill_top_opacity: 0.25,
            fill_bottom_opacity: 0.0,
        }
    }
}

/// Horizontal grid lines and axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub dash: [f64; 2],
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Gap between the plot's left edge and the right end of y-tick labels.
    pub y_label_gap_px: f64,
    /// Baseline offset of y-tick labels below their grid line.
    pub y_label_drop_px: f64,
    /// Distance of period labels above the bottom edge.
    pub x_label_bottom_offset_px: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0),
            line_width: 1.0,
            dash: [2.0, 3.0],
            label_color: Color::rgb(107.0 / 255.0, 114.0 / 255.0, 128.0 / 255.0),
            label_font_size_px: 10.0,
            y_label_gap_px: 8.0,
            y_label_drop_px: 4.0,
            x_label_bottom_offset_px: 12.0,
        }
    }
}

/// Guide line and point markers drawn for the hovered index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverStyle {
    pub guide_color: Color,
    pub guide_width: f64,
    pub guide_dash: [f64; 2],
    pub guide_opacity: f64,
    pub marker_radius: f64,
    pub marker_stroke_width: f64,
    pub marker_fill: Color,
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            guide_color: Color::rgb(136.0 / 255.0, 132.0 / 255.0, 216.0 / 255.0),
            guide_width: 2.0,
            guide_dash: [4.0, 2.0],
            guide_opacity: 0.6,
            marker_radius: 6.0,
            marker_stroke_width: 3.0,
            marker_fill: Color::WHITE,
        }
    }
}

/// Placement rules of the tooltip overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub width: f64,
    /// Minimum distance kept from the plot's left and right padding.
    pub edge_inset: f64,
    /// How far the tooltip sits above the highest hovered value.
    pub lift: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            width: 160.0,
            edge_inset: 10.0,
            lift: 40.0,
        }
    }
}

/// Production chart configuration.
///
/// Every field has a default, so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: PlotLayout,
    #[serde(default = "default_series")]
    pub series: [SeriesDescriptor; 3],
    #[serde(default)]
    pub series_style: SeriesStyle,
    #[serde(default)]
    pub grid: GridStyle,
    #[serde(default)]
    pub hover: HoverStyle,
    #[serde(default)]
    pub tooltip: TooltipLayout,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: PlotLayout::default(),
            series: default_series(),
            series_style: SeriesStyle::default(),
            grid: GridStyle::default(),
            hover: HoverStyle::default(),
            tooltip: TooltipLayout::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PlotLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: [SeriesDescriptor; 3]) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, style: SeriesStyle) -> Self {
        self.series_style = style;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_hover(mut self, hover: HoverStyle) -> Self {
        self.hover = hover;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipLayout) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;
        validate_series(&self.series)?;

        positive("series_style.line_width", self.series_style.line_width)?;
        unit_interval("series_style.fill_top_opacity", self.series_style.fill_top_opacity)?;
        unit_interval(
            "series_style.fill_bottom_opacity",
            self.series_style.fill_bottom_opacity,
        )?;

        positive("grid.line_width", self.grid.line_width)?;
        positive("grid.label_font_size_px", self.grid.label_font_size_px)?;
        non_negative_all("grid.dash", &self.grid.dash)?;
        non_negative_all(
            "grid label offsets",
            &[
                self.grid.y_label_gap_px,
                self.grid.y_label_drop_px,
                self.grid.x_label_bottom_offset_px,
            ],
        )?;
        self.grid.line_color.validate()?;
        self.grid.label_color.validate()?;

        positive("hover.guide_width", self.hover.guide_width)?;
        non_negative_all("hover.guide_dash", &self.hover.guide_dash)?;
        unit_interval("hover.guide_opacity", self.hover.guide_opacity)?;
        positive("hover.marker_radius", self.hover.marker_radius)?;
        positive("hover.marker_stroke_width", self.hover.marker_stroke_width)?;
        self.hover.guide_color.validate()?;
        self.hover.marker_fill.validate()?;

        positive("tooltip.width", self.tooltip.width)?;
        non_negative_all(
            "tooltip offsets",
            &[self.tooltip.edge_inset, self.tooltip.lift],
        )?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

fn unit_interval(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

fn non_negative_all(name: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(ChartError::InvalidData(format!(
            "`{name}` values must be finite and >= 0"
        )));
    }
    Ok(())
}
