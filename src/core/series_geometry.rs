use serde::{Deserialize, Serialize};

use crate::core::{ChartDataPoint, PathCommand, PathPoint, PlotScale, SeriesKey, smooth_segments};

/// Pixel-space geometry of one series.
///
/// `line` is a single continuous smoothed path through `points`.
/// `area` repeats the line and closes it down to the zero baseline for fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub key: SeriesKey,
    pub points: Vec<PathPoint>,
    pub line: Vec<PathCommand>,
    pub area: Vec<PathCommand>,
}

impl SeriesGeometry {
    #[must_use]
    pub fn empty(key: SeriesKey) -> Self {
        Self {
            key,
            points: Vec::new(),
            line: Vec::new(),
            area: Vec::new(),
        }
    }

    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.line.iter().filter(|command| command.is_curve()).count()
    }
}

/// Builds the smoothed line command list through `points`.
///
/// Empty input yields no commands; a single point yields one `MoveTo`.
#[must_use]
pub fn smoothed_line_commands(points: &[PathPoint]) -> Vec<PathCommand> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let segments = smooth_segments(points);
    let mut commands = Vec::with_capacity(segments.len() + 1);
    commands.push(PathCommand::MoveTo(*first));
    commands.extend(segments.into_iter().map(|segment| PathCommand::CurveTo {
        control1: segment.control1,
        control2: segment.control2,
        end: segment.end,
    }));
    commands
}

/// Closes a line down to `baseline_y` at both ends.
///
/// The closing edges run from the last point straight down, back along the
/// baseline, and the path is explicitly closed.
#[must_use]
pub fn close_area_commands(
    line: &[PathCommand],
    points: &[PathPoint],
    baseline_y: f64,
) -> Vec<PathCommand> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut area = Vec::with_capacity(line.len() + 3);
    area.extend_from_slice(line);
    area.push(PathCommand::LineTo(PathPoint::new(last.x, baseline_y)));
    area.push(PathCommand::LineTo(PathPoint::new(first.x, baseline_y)));
    area.push(PathCommand::ClosePath);
    area
}

/// Projects one series of `data` through `scale`.
#[must_use]
pub fn project_series(data: &[ChartDataPoint], key: SeriesKey, scale: PlotScale) -> SeriesGeometry {
    if data.is_empty() {
        return SeriesGeometry::empty(key);
    }

    let points: Vec<PathPoint> = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            PathPoint::new(scale.x_for_index(index), scale.y_for_value(key.value_of(point)))
        })
        .collect();
    let line = smoothed_line_commands(&points);
    let area = close_area_commands(&line, &points, scale.baseline_y());

    SeriesGeometry {
        key,
        points,
        line,
        area,
    }
}

/// Projects all three series in render order.
#[must_use]
pub fn project_all_series(data: &[ChartDataPoint], scale: PlotScale) -> [SeriesGeometry; 3] {
    SeriesKey::ALL.map(|key| project_series(data, key, scale))
}
