//! Canonical coordinate ordering after a shape is drawn.

use crate::shapes::{Coordinates, ShapeKind};

/// Reorder `coords` so the invariants for `kind` hold regardless of drag direction.
///
/// Rectangles get `x1 <= x2` and `y1 <= y2`, each axis independently. Lines
/// are ordered left to right, then top to bottom. Arrows keep the drawn
/// direction since the head sits on `(x2, y2)`. Other kinds pass through.
pub fn adjust_element_coordinates(kind: ShapeKind, coords: Coordinates) -> Coordinates {
    let Coordinates { x1, y1, x2, y2 } = coords;
    match kind {
        ShapeKind::Rectangle => Coordinates::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
        ShapeKind::Line => {
            if x1 < x2 || (x1 == x2 && y1 < y2) {
                coords
            } else {
                Coordinates::new(x2, y2, x1, y1)
            }
        }
        ShapeKind::Arrow | ShapeKind::Pencil | ShapeKind::Selection => coords,
    }
}
