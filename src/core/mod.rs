pub mod format;
pub mod layout;
pub mod path;
pub mod scale;
pub mod series_geometry;
pub mod smoothing;
pub mod ticks;
pub mod types;

pub use format::format_number;
pub use hit_test::nearest_index;
pub use layout::PlotLayout;
pub use path::{PathCommand, PathPoint};
pub use scale::{MAX_VALUE_RATIO, PlotScale};
pub use series_geometry::{
    SeriesGeometry, close_area_commands, project_all_series, project_series,
    smoothed_line_commands,
};
pub use smoothing::{CubicSegment, SMOOTHING_FACTOR, smooth_segments};
pub use ticks::{Y_TICK_RATIOS, y_ticks};
pub use types::{ChartDataPoint, SeriesKey, Viewport};
