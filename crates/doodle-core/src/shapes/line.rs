//! Line shape.

use super::{Coordinates, Geometry, ShapeId, ShapeKind, ShapeTrait};
use kurbo::{BezPath, Point, Rect, Vec2};

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
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

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        crate::geometry::distance(self.start, self.end)
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }

    fn geometry(&self) -> Geometry {
        Geometry::Segment(self.coordinates())
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}
