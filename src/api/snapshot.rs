use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::PlotLayout;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::{ProductionChart, Tooltip};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Rendered paths of one series inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPathSnapshot {
    pub label: String,
    pub color: Color,
    pub line: String,
    pub area: String,
}

/// Serializable chart state used by regression tests and debugging tools.
///
/// `series` is keyed by the series' JSON field name in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub layout: PlotLayout,
    pub max_value: Option<f64>,
    pub periods: Vec<String>,
    pub series: IndexMap<String, SeriesPathSnapshot>,
    pub hover_index: Option<usize>,
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ProductionChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let mut series = IndexMap::with_capacity(3);
        for (descriptor, paths) in self.config.series.iter().zip(self.series_paths()) {
            series.insert(
                paths.key.as_str().to_owned(),
                SeriesPathSnapshot {
                    label: descriptor.label.clone(),
                    color: descriptor.color,
                    line: paths.line,
                    area: paths.area,
                },
            );
        }

        ChartSnapshot {
            layout: self.config.layout,
            max_value: self.scale().max_value(),
            periods: self.data.iter().map(|point| point.period.clone()).collect(),
            series,
            hover_index: self.hover.index(),
            tooltip: self.tooltip(),
        }
    }
}
