//! Freehand pencil stroke.

use super::{Geometry, ShapeId, ShapeKind, ShapeTrait, StrokePoint};
use crate::paths::smooth_stroke_path;
use kurbo::{BezPath, Point, Rect, Vec2};

/// A freehand drawing (series of samples).
#[derive(Debug, Clone, PartialEq)]
pub struct Freehand {
    pub(crate) id: ShapeId,
    /// Samples in input order.
    pub points: Vec<StrokePoint>,
}

impl Freehand {
    /// Create a new empty stroke.
    pub fn new(id: ShapeId) -> Self {
        Self::from_points(id, Vec::new())
    }

    /// Create from existing samples.
    pub fn from_points(id: ShapeId, points: Vec<StrokePoint>) -> Self {
        Self { id, points }
    }

    /// Add a sample to the stroke.
    pub fn add_point(&mut self, point: StrokePoint) {
        self.points.push(point);
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample positions without pressure.
    pub fn positions(&self) -> Vec<Point> {
        self.points.iter().map(StrokePoint::point).collect()
    }
}

impl ShapeTrait for Freehand {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Pencil
    }

    fn bounds(&self) -> Rect {
        let mut points = self.points.iter().map(StrokePoint::point);
        match points.next() {
            Some(first) => points.fold(Rect::from_points(first, first), |acc, p| acc.union_pt(p)),
            None => Rect::ZERO,
        }
    }

    fn to_path(&self) -> BezPath {
        smooth_stroke_path(&self.positions(), false)
    }

    fn geometry(&self) -> Geometry {
        Geometry::Points {
            points: self.points.clone(),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            point.x += delta.x;
            point.y += delta.y;
        }
    }
}
