//! Persisted snapshot of one committed shape mutation.

use crate::shapes::{Geometry, Shape, ShapeId, ShapeKind};
use serde::{Deserialize, Serialize};

/// Kind of committed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Drawing,
    Moving,
    Resizing,
    Delete,
}

/// A shape's identity and post-mutation geometry.
///
/// Serializes with `points` for pencil strokes and `x1..y2` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: ShapeId,
    pub action_type: ActionType,
    #[serde(alias = "type")]
    pub kind: ShapeKind,
    #[serde(flatten)]
    pub geometry: Geometry,
}

impl HistoryRecord {
    /// Build a record from its parts.
    ///
    /// Geometry that does not fit `kind` is kept as given; [`Self::to_shape`]
    /// returns `None` for such records.
    pub fn new(id: ShapeId, action_type: ActionType, kind: ShapeKind, geometry: Geometry) -> Self {
        if kind.uses_points() != geometry.is_points() {
            log::warn!("History record #{} has geometry that does not match {}", id, kind);
        }
        Self {
            id,
            action_type,
            kind,
            geometry,
        }
    }

    /// Snapshot `shape` as it stands after `action_type` completed.
    pub fn from_shape(shape: &Shape, action_type: ActionType) -> Self {
        Self {
            id: shape.id(),
            action_type,
            kind: shape.kind(),
            geometry: shape.geometry(),
        }
    }

    /// Rebuild the shape this record describes.
    pub fn to_shape(&self) -> Option<Shape> {
        Shape::from_geometry(self.id, self.kind, self.geometry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Coordinates, StrokePoint};
    use serde_json::json;

    #[test]
    fn test_rectangle_wire_format() {
        let record = HistoryRecord::new(
            3,
            ActionType::Drawing,
            ShapeKind::Rectangle,
            Coordinates::new(10.0, 20.0, 50.0, 80.0).into(),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "actionType": "drawing",
                "kind": "rectangle",
                "x1": 10.0, "y1": 20.0, "x2": 50.0, "y2": 80.0
            })
        );
        let back: HistoryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_pencil_round_trip_preserves_points() {
        let points = vec![
            StrokePoint::new(0.5, 1.25),
            StrokePoint::with_pressure(3.0, 4.0, 0.35),
            StrokePoint::new(-7.125, 9.0),
        ];
        let record = HistoryRecord::new(
            9,
            ActionType::Moving,
            ShapeKind::Pencil,
            points.clone().into(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("x1"));

        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.geometry.points(), Some(points.as_slice()));
        assert_eq!(back.kind, ShapeKind::Pencil);
    }

    #[test]
    fn test_accepts_legacy_type_key() {
        let record: HistoryRecord = serde_json::from_value(json!({
            "id": 1,
            "actionType": "resizing",
            "type": "arrow",
            "x1": 0, "y1": 0, "x2": 5, "y2": 5
        }))
        .unwrap();
        assert_eq!(record.kind, ShapeKind::Arrow);
        assert_eq!(record.action_type, ActionType::Resizing);
        assert_eq!(
            record.geometry.coordinates(),
            Some(Coordinates::new(0.0, 0.0, 5.0, 5.0))
        );
    }

    #[test]
    fn test_from_shape_and_back() {
        let shape = Shape::from_geometry(
            4,
            ShapeKind::Line,
            Coordinates::new(1.0, 2.0, 3.0, 4.0).into(),
        )
        .unwrap();
        let record = HistoryRecord::from_shape(&shape, ActionType::Delete);
        assert_eq!(record.id, 4);
        assert_eq!(record.to_shape(), Some(shape));
    }

    #[test]
    fn test_mismatched_geometry_does_not_rebuild() {
        let record = HistoryRecord::new(
            1,
            ActionType::Drawing,
            ShapeKind::Pencil,
            Coordinates::new(0.0, 0.0, 10.0, 10.0).into(),
        );
        assert_eq!(record.kind, ShapeKind::Pencil);
        assert_eq!(record.to_shape(), None);
    }
}
