//! Rectangle shape.

use super::{Coordinates, Geometry, ShapeId, ShapeKind, ShapeTrait};
use kurbo::{BezPath, Rect, Shape as KurboShape, Vec2};

/// An axis-aligned rectangle defined by two corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Corner pair. Unordered until normalized.
    pub coords: Coordinates,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(id: ShapeId, coords: Coordinates) -> Self {
        Self { id, coords }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        self.coords.to_rect()
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn geometry(&self) -> Geometry {
        Geometry::Segment(self.coords)
    }

    fn translate(&mut self, delta: Vec2) {
        self.coords = self.coords.translate(delta);
    }
}
