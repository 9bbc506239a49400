mod config;
mod data_controller;
mod dataset;
mod engine;
mod interaction_controller;
mod render_frame_builder;
mod series;
mod snapshot;
mod tooltip;

pub use config::{ChartConfig, GridStyle, HoverStyle, SeriesStyle, TooltipLayout};
pub use data_controller::SeriesPaths;
pub use dataset::{LegendItem, ProductionData, default_quarterly_chart_data};
pub use engine::ProductionChart;
pub use series::{SeriesDescriptor, default_series, validate_series};
pub use snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, SeriesPathSnapshot,
};
pub use tooltip::{Tooltip, TooltipRow};

pub use crate::interaction::{HoverState, PointerEvent};
