use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Fixed-size plot area: padding around an inner drawing rectangle.
///
/// Left and bottom padding leave room for y-tick and period labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            padding_left: 48.0,
            padding_right: 16.0,
            padding_top: 16.0,
            padding_bottom: 40.0,
            inner_width: 760.0,
            inner_height: 260.0,
        }
    }
}

impl PlotLayout {
    pub fn new(
        padding_left: f64,
        padding_right: f64,
        padding_top: f64,
        padding_bottom: f64,
        inner_width: f64,
        inner_height: f64,
    ) -> ChartResult<Self> {
        let layout = Self {
            padding_left,
            padding_right,
            padding_top,
            padding_bottom,
            inner_width,
            inner_height,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("padding_left", self.padding_left),
            ("padding_right", self.padding_right),
            ("padding_top", self.padding_top),
            ("padding_bottom", self.padding_bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidLayout(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("inner_width", self.inner_width),
            ("inner_height", self.inner_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidLayout(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.inner_width + self.padding_left + self.padding_right
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.inner_height + self.padding_top + self.padding_bottom
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width(), self.height())
    }

    /// Horizontal center of the inner plot area.
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.padding_left + self.inner_width / 2.0
    }

    #[must_use]
    pub fn right_x(self) -> f64 {
        self.padding_left + self.inner_width
    }

    /// Pixel row of the zero value.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.padding_top + self.inner_height
    }
}
