use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ChartDataPoint, PlotScale, SeriesGeometry, SeriesKey, project_all_series};
use crate::render::{Renderer, svg_path_data};

use super::{ProductionChart, ProductionData};

/// SVG path data of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPaths {
    pub key: SeriesKey,
    pub line: String,
    pub area: String,
}

impl<R: Renderer> ProductionChart<R> {
    /// Replaces the plotted sequence.
    ///
    /// A hover index that no longer exists is cleared.
    pub fn set_data(&mut self, data: Vec<ChartDataPoint>) {
        debug!(count = data.len(), "set production chart data");
        if data
            .iter()
            .any(|point| point.values().iter().any(|value| !value.is_finite()))
        {
            warn!("chart data contains non-finite values; they are drawn on the baseline");
        }
        self.data = data;

        if let Some(index) = self.hover.index() {
            if index >= self.data.len() {
                warn!(index, count = self.data.len(), "clearing stale hover index");
                self.hover.clear();
            }
        }
    }

    /// Loads the chart sequence of a production panel, falling back to the
    /// quarterly default set.
    pub fn set_production_data(&mut self, production: &ProductionData) {
        if production.chart_data.is_none() {
            debug!(title = %production.title, "panel has no chart data; using quarterly default");
        }
        self.set_data(production.chart_data_or_default());
    }

    #[must_use]
    pub fn data(&self) -> &[ChartDataPoint] {
        &self.data
    }

    /// Scale for the current data, recomputed on each call.
    #[must_use]
    pub fn scale(&self) -> PlotScale {
        PlotScale::from_data(self.config.layout, &self.data)
    }

    #[must_use]
    pub fn series_geometry(&self) -> [SeriesGeometry; 3] {
        project_all_series(&self.data, self.scale())
    }

    #[must_use]
    pub fn series_paths(&self) -> [SeriesPaths; 3] {
        self.series_geometry().map(|geometry| SeriesPaths {
            key: geometry.key,
            line: svg_path_data(&geometry.line),
            area: svg_path_data(&geometry.area),
        })
    }
}
