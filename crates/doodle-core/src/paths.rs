//! Render-time geometry: arrowheads and smoothed freehand strokes.

use crate::geometry::distance;
use kurbo::{BezPath, Point};
use std::f64::consts::FRAC_PI_6;

/// Nominal arrowhead length in world units.
pub const ARROW_HEAD_SIZE: f64 = 18.0;

/// Angle between the shaft and each head wing.
pub const ARROW_HEAD_ANGLE: f64 = FRAC_PI_6;

/// Fewer samples than this produce an empty smoothed path.
pub const MIN_SMOOTHING_POINTS: usize = 4;

/// Head length for an arrow from `start` to `end`, capped at half the shaft.
pub fn arrow_head_length(start: Point, end: Point) -> f64 {
    ARROW_HEAD_SIZE.min(distance(start, end) / 2.0)
}

/// Arrow outline as `[start, tip, wing1, tip, wing2]`.
///
/// The tip is repeated so the sequence can be stroked as one polyline:
/// shaft, first wing, back to the tip, second wing.
pub fn arrow_points(start: Point, end: Point) -> [Point; 5] {
    let head = arrow_head_length(start, end);
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let wing = |theta: f64| Point::new(end.x - head * theta.cos(), end.y - head * theta.sin());

    [
        start,
        end,
        wing(angle - ARROW_HEAD_ANGLE),
        end,
        wing(angle + ARROW_HEAD_ANGLE),
    ]
}

/// [`arrow_points`] as a single open polyline path.
pub fn arrow_path(start: Point, end: Point) -> BezPath {
    let points = arrow_points(start, end);
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path
}

/// Smooth a freehand stroke with quadratic segments through sample midpoints.
///
/// Each sample after the first acts as the control point of a curve that ends
/// halfway to the next sample, so the stroke has no corners but does not pass
/// through the samples themselves.
pub fn smooth_stroke_path(points: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < MIN_SMOOTHING_POINTS {
        return path;
    }

    path.move_to(points[0]);
    for pair in points[1..].windows(2) {
        path.quad_to(pair[0], pair[0].midpoint(pair[1]));
    }
    if closed {
        path.close_path();
    }
    path
}
