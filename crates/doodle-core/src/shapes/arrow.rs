//! Arrow shape.

use super::{Coordinates, Geometry, ShapeId, ShapeKind, ShapeTrait};
use crate::paths::{arrow_path, arrow_points};
use kurbo::{BezPath, Point, Rect, Vec2};

/// A line with an arrowhead at its end. Direction is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point (where the arrowhead points).
    pub end: Point,
}

impl Arrow {
    /// Create a new arrow.
    pub fn new(id: ShapeId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::from_points(self.start, self.end)
    }

    pub fn set_coordinates(&mut self, coords: Coordinates) {
        self.start = coords.start();
        self.end = coords.end();
    }

    /// Shaft followed by the two head strokes: `[start, tip, wing, tip, wing]`.
    pub fn head_points(&self) -> [Point; 5] {
        arrow_points(self.start, self.end)
    }
}

impl ShapeTrait for Arrow {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Arrow
    }

    fn bounds(&self) -> Rect {
        // Include arrowhead wings
        self.head_points()
            .iter()
            .fold(Rect::from_points(self.start, self.end), |acc, p| {
                acc.union_pt(*p)
            })
    }

    fn to_path(&self) -> BezPath {
        arrow_path(self.start, self.end)
    }

    fn geometry(&self) -> Geometry {
        Geometry::Segment(self.coordinates())
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_include_head() {
        let arrow = Arrow::new(1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let bounds = arrow.bounds();
        assert!(bounds.y0 < 0.0);
        assert!(bounds.y1 > 0.0);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate() {
        let mut arrow = Arrow::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        arrow.translate(Vec2::new(1.0, 2.0));
        assert_eq!(arrow.coordinates(), Coordinates::new(1.0, 2.0, 11.0, 2.0));
    }
}
