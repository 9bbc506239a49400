//! solar-chart: production area-chart geometry for solar-asset dashboards.
//!
//! Plots actual, baseline and GHI-adjusted baseline production over a shared
//! period axis as smoothed lines with baseline-closed area fills, and resolves
//! pointer positions to the nearest period for tooltips. Output is a
//! backend-agnostic `RenderFrame`; `SvgRenderer` turns it into SVG markup.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ProductionChart};
pub use error::{ChartError, ChartResult};
