//! Shape definitions for the whiteboard.

mod arrow;
mod freehand;
mod line;
mod rectangle;

pub use arrow::Arrow;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for shapes, stable for the shape's lifetime.
pub type ShapeId = u64;

/// Discriminant selecting how a shape's geometry is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Line,
    Arrow,
    Pencil,
    /// Rubber-band selection marker. Never a drawable hit target.
    Selection,
}

impl ShapeKind {
    /// Name used on the wire and by the UI layer.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Pencil => "pencil",
            ShapeKind::Selection => "selection",
        }
    }

    /// Whether the authoritative geometry is a point sequence rather than `x1..y2`.
    pub fn uses_points(self) -> bool {
        matches!(self, ShapeKind::Pencil)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown shape kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape kind: {0}")]
pub struct ParseShapeKindError(pub String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "line" => Ok(ShapeKind::Line),
            "arrow" => Ok(ShapeKind::Arrow),
            "pencil" => Ok(ShapeKind::Pencil),
            "selection" => Ok(ShapeKind::Selection),
            other => Err(ParseShapeKindError(other.to_string())),
        }
    }
}

/// Two corner or endpoint coordinates.
///
/// Unordered corners for rectangles, ordered start/end for lines and arrows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Coordinates {
    /// Degenerate box at the origin.
    pub const ZERO: Coordinates = Coordinates::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// The `(x1, y1)` slot.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The `(x2, y2)` slot.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Axis-aligned box spanned by both slots, whatever their order.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.start(), self.end())
    }

    /// Offset both slots by `delta`.
    pub fn translate(self, delta: Vec2) -> Self {
        Self::new(
            self.x1 + delta.x,
            self.y1 + delta.y,
            self.x2 + delta.x,
            self.y2 + delta.y,
        )
    }
}

/// A single freehand sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    /// Stylus pressure, when the input device reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl StrokePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, pressure: None }
    }

    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for StrokePoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Authoritative geometry of a shape, selected by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    /// Freehand samples (pencil).
    Points { points: Vec<StrokePoint> },
    /// Corner pair or endpoints (everything else).
    Segment(Coordinates),
}

impl Geometry {
    pub fn is_points(&self) -> bool {
        matches!(self, Geometry::Points { .. })
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Geometry::Segment(coords) => Some(*coords),
            Geometry::Points { .. } => None,
        }
    }

    pub fn points(&self) -> Option<&[StrokePoint]> {
        match self {
            Geometry::Points { points } => Some(points),
            Geometry::Segment(_) => None,
        }
    }
}

impl From<Coordinates> for Geometry {
    fn from(coords: Coordinates) -> Self {
        Geometry::Segment(coords)
    }
}

impl From<Vec<StrokePoint>> for Geometry {
    fn from(points: Vec<StrokePoint>) -> Self {
        Geometry::Points { points }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the kind discriminant.
    fn kind(&self) -> ShapeKind;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Snapshot of the authoritative geometry.
    fn geometry(&self) -> Geometry;

    /// Move every coordinate by `delta`.
    fn translate(&mut self, delta: Vec2);
}

/// Enum wrapper for all drawable shape types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Line(Line),
    Arrow(Arrow),
    Pencil(Freehand),
}

impl Shape {
    /// Build a shape of `kind` from a geometry snapshot.
    ///
    /// Returns `None` for the selection kind or when the geometry variant does
    /// not match the kind.
    pub fn from_geometry(id: ShapeId, kind: ShapeKind, geometry: Geometry) -> Option<Self> {
        match (kind, geometry) {
            (ShapeKind::Rectangle, Geometry::Segment(c)) => {
                Some(Shape::Rectangle(Rectangle::new(id, c)))
            }
            (ShapeKind::Line, Geometry::Segment(c)) => {
                Some(Shape::Line(Line::new(id, c.start(), c.end())))
            }
            (ShapeKind::Arrow, Geometry::Segment(c)) => {
                Some(Shape::Arrow(Arrow::new(id, c.start(), c.end())))
            }
            (ShapeKind::Pencil, Geometry::Points { points }) => {
                Some(Shape::Pencil(Freehand::from_points(id, points)))
            }
            _ => None,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Arrow(s) => s.id(),
            Shape::Pencil(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(s) => s.kind(),
            Shape::Line(s) => s.kind(),
            Shape::Arrow(s) => s.kind(),
            Shape::Pencil(s) => s.kind(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Arrow(s) => s.bounds(),
            Shape::Pencil(s) => s.bounds(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Arrow(s) => s.to_path(),
            Shape::Pencil(s) => s.to_path(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            Shape::Rectangle(s) => s.geometry(),
            Shape::Line(s) => s.geometry(),
            Shape::Arrow(s) => s.geometry(),
            Shape::Pencil(s) => s.geometry(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Line(s) => s.translate(delta),
            Shape::Arrow(s) => s.translate(delta),
            Shape::Pencil(s) => s.translate(delta),
        }
    }

    /// The `x1..y2` geometry, or `None` for pencil strokes.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Shape::Rectangle(r) => Some(r.coords),
            Shape::Line(l) => Some(l.coordinates()),
            Shape::Arrow(a) => Some(a.coordinates()),
            Shape::Pencil(_) => None,
        }
    }

    /// Replace the `x1..y2` geometry. Returns `false` for pencil strokes.
    pub fn set_coordinates(&mut self, coords: Coordinates) -> bool {
        match self {
            Shape::Rectangle(r) => r.coords = coords,
            Shape::Line(l) => l.set_coordinates(coords),
            Shape::Arrow(a) => a.set_coordinates(coords),
            Shape::Pencil(_) => return false,
        }
        true
    }

    /// Replace the geometry wholesale. Returns `false` if the variant does not fit the kind.
    pub fn set_geometry(&mut self, geometry: Geometry) -> bool {
        match (self, geometry) {
            (Shape::Pencil(f), Geometry::Points { points }) => {
                f.points = points;
                true
            }
            (Shape::Pencil(_), Geometry::Segment(_)) => false,
            (shape, Geometry::Segment(coords)) => shape.set_coordinates(coords),
            (_, Geometry::Points { .. }) => false,
        }
    }

    /// Freehand samples, or `None` for segment-based shapes.
    pub fn points(&self) -> Option<&[StrokePoint]> {
        match self {
            Shape::Pencil(f) => Some(&f.points),
            _ => None,
        }
    }
}
