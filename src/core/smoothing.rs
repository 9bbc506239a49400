use serde::{Deserialize, Serialize};

use crate::core::PathPoint;

/// Fraction of the neighbor-to-neighbor vector used to offset control points.
///
/// Shared by every segment so all series curve the same way.
pub const SMOOTHING_FACTOR: f64 = 0.2;

/// One cubic Bezier segment; its start is the previous segment's `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub control1: PathPoint,
    pub control2: PathPoint,
    pub end: PathPoint,
}

/// Converts a polyline into a continuous Catmull-Rom style cubic curve.
///
/// For the segment `p1 -> p2`, control points are offset along the vectors
/// `p2 - p0` and `p3 - p1`, where `p0`/`p3` are the outer neighbors clamped to
/// the first/last point. Returns exactly `points.len() - 1` segments, or none
/// for fewer than two points.
#[must_use]
pub fn smooth_segments(points: &[PathPoint]) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let last = points.len() - 1;
    let mut segments = Vec::with_capacity(last);
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        segments.push(CubicSegment {
            control1: PathPoint::new(
                p1.x + (p2.x - p0.x) * SMOOTHING_FACTOR,
                p1.y + (p2.y - p0.y) * SMOOTHING_FACTOR,
            ),
            control2: PathPoint::new(
                p2.x - (p3.x - p1.x) * SMOOTHING_FACTOR,
                p2.y - (p3.y - p1.y) * SMOOTHING_FACTOR,
            ),
            end: p2,
        });
    }
    segments
}
