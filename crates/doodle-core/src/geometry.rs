//! Geometry primitives shared by hit-testing and path generation.

use kurbo::Point;

/// Anchor proximity window in world units.
///
/// Fixed regardless of camera zoom.
pub const NEAR_POINT_TOLERANCE: f64 = 5.0;

/// Default slack allowed by [`on_line`] for straight lines and arrows.
pub const LINE_TOLERANCE: f64 = 1.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Return `label` when `point` lies within [`NEAR_POINT_TOLERANCE`] of `target` on both axes.
pub fn near_point<T>(point: Point, target: Point, label: T) -> Option<T> {
    if (point.x - target.x).abs() < NEAR_POINT_TOLERANCE
        && (point.y - target.y).abs() < NEAR_POINT_TOLERANCE
    {
        Some(label)
    } else {
        None
    }
}

/// Check whether `point` lies on the line through `a` and `b`.
///
/// Uses the triangle-inequality slack `|ab| - (|ap| + |bp|)`. This is a
/// collinearity test with tolerance, not a bounded segment distance: points
/// just past either endpoint can still count as on the line.
pub fn on_line(a: Point, b: Point, point: Point, max_distance: f64) -> bool {
    let offset = distance(a, b) - (distance(a, point) + distance(b, point));
    offset.abs() < max_distance
}
