use serde::{Deserialize, Serialize};

/// Point in plot pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Backend-agnostic vector path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(PathPoint),
    CurveTo {
        control1: PathPoint,
        control2: PathPoint,
        end: PathPoint,
    },
    LineTo(PathPoint),
    ClosePath,
}

impl PathCommand {
    #[must_use]
    pub fn is_curve(self) -> bool {
        matches!(self, PathCommand::CurveTo { .. })
    }

    /// End point of the command; `ClosePath` has none.
    #[must_use]
    pub fn end_point(self) -> Option<PathPoint> {
        match self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(point),
            PathCommand::CurveTo { end, .. } => Some(end),
            PathCommand::ClosePath => None,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        let finite = |p: PathPoint| p.x.is_finite() && p.y.is_finite();
        match self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => finite(point),
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            } => finite(control1) && finite(control2) && finite(end),
            PathCommand::ClosePath => true,
        }
    }
}
