use serde::{Deserialize, Serialize};

use crate::core::SeriesKey;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Display settings of one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub key: SeriesKey,
    pub color: Color,
    pub label: String,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(key: SeriesKey, color: Color, label: impl Into<String>) -> Self {
        Self {
            key,
            color,
            label: label.into(),
        }
    }
}

/// The fixed Actual / Baseline / GHI adjusted Baseline descriptors.
#[must_use]
pub fn default_series() -> [SeriesDescriptor; 3] {
    [
        SeriesDescriptor::new(
            SeriesKey::Actual,
            Color::rgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0),
            "Actual",
        ),
        SeriesDescriptor::new(
            SeriesKey::Baseline,
            Color::rgb(156.0 / 255.0, 163.0 / 255.0, 175.0 / 255.0),
            "Baseline",
        ),
        SeriesDescriptor::new(
            SeriesKey::GhiAdjustedBaseline,
            Color::rgb(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0),
            "GHI adjusted Baseline",
        ),
    ]
}

/// Descriptors must cover `SeriesKey::ALL` in order, each with a label.
pub fn validate_series(series: &[SeriesDescriptor; 3]) -> ChartResult<()> {
    for (descriptor, expected) in series.iter().zip(SeriesKey::ALL) {
        if descriptor.key != expected {
            return Err(ChartError::InvalidData(format!(
                "series descriptor `{}` is out of order, expected `{}`",
                descriptor.key.as_str(),
                expected.as_str()
            )));
        }
        if descriptor.label.trim().is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{}` needs a non-empty label",
                expected.as_str()
            )));
        }
        descriptor.color.validate()?;
    }
    Ok(())
}
