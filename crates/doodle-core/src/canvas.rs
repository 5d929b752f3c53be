//! Canvas document and gesture-level shape mutation.

use crate::anchor::Anchor;
use crate::hit_test::shape_at_position;
use crate::history::{ActionType, HistoryLog, HistoryRecord};
use crate::normalize::adjust_element_coordinates;
use crate::resize::resized_coordinates;
use crate::shapes::{Coordinates, Geometry, Shape, ShapeId, ShapeKind, StrokePoint};
use crate::storage::{HistoryStore, StorageResult};
use kurbo::{Point, Vec2};

/// Live shapes of one document, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
    last_id: ShapeId,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shape of `kind` with a fresh id.
    ///
    /// Returns `None` for the selection kind or mismatched geometry.
    pub fn create(&mut self, kind: ShapeKind, geometry: impl Into<Geometry>) -> Option<ShapeId> {
        let id = self.last_id + 1;
        let shape = Shape::from_geometry(id, kind, geometry.into())?;
        Some(self.add_shape(shape))
    }

    /// Add a shape, replacing any existing shape with the same id in place.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.last_id = self.last_id.max(id);
        match self.get_mut(id) {
            Some(existing) => *existing = shape,
            None => self.shapes.push(shape),
        }
        id
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost hit in insertion order: the first shape under `point`.
    pub fn shape_at(&self, point: Point) -> Option<(ShapeId, Anchor)> {
        shape_at_position(point, &self.shapes)
    }

    /// Append a sample to a pencil stroke being drawn.
    pub fn append_point(&mut self, id: ShapeId, point: StrokePoint) -> bool {
        match self.get_mut(id) {
            Some(Shape::Pencil(stroke)) => {
                stroke.add_point(point);
                true
            }
            _ => false,
        }
    }

    /// Move the second corner or endpoint while a shape is being drawn.
    pub fn update_drawing(&mut self, id: ShapeId, pointer: Point) -> bool {
        let Some(shape) = self.get_mut(id) else {
            return false;
        };
        match shape.coordinates() {
            Some(coords) => shape.set_coordinates(Coordinates::from_points(coords.start(), pointer)),
            None => false,
        }
    }

    /// Canonicalize a shape's coordinates at the end of a draw or resize gesture.
    ///
    /// Returns the new coordinates, or `None` for pencil strokes and unknown ids.
    pub fn normalize_shape(&mut self, id: ShapeId) -> Option<Coordinates> {
        let shape = self.get_mut(id)?;
        let adjusted = adjust_element_coordinates(shape.kind(), shape.coordinates()?);
        shape.set_coordinates(adjusted);
        Some(adjusted)
    }

    /// Translate a shape by `delta`.
    pub fn move_shape(&mut self, id: ShapeId, delta: Vec2) -> bool {
        match self.get_mut(id) {
            Some(shape) => {
                shape.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Drag `anchor` of a shape to `pointer`.
    ///
    /// Pencil strokes and the `Inside` anchor are not resizable.
    pub fn resize_shape(&mut self, id: ShapeId, pointer: Point, anchor: Anchor) -> bool {
        if !anchor.is_resize_handle() {
            return false;
        }
        let Some(shape) = self.get_mut(id) else {
            return false;
        };
        match shape.coordinates() {
            Some(coords) => shape.set_coordinates(resized_coordinates(pointer, Some(anchor), coords)),
            None => false,
        }
    }

    /// Record the current state of a shape after `action` completed.
    pub fn commit<S: HistoryStore>(
        &self,
        log: &mut HistoryLog<S>,
        id: ShapeId,
        action: ActionType,
    ) -> StorageResult<bool> {
        let Some(shape) = self.get(id) else {
            return Ok(false);
        };
        log.push(HistoryRecord::from_shape(shape, action))?;
        Ok(true)
    }

    /// Remove a shape and record the deletion.
    pub fn delete<S: HistoryStore>(
        &mut self,
        log: &mut HistoryLog<S>,
        id: ShapeId,
    ) -> StorageResult<bool> {
        let Some(shape) = self.remove_shape(id) else {
            return Ok(false);
        };
        log.push(HistoryRecord::from_shape(&shape, ActionType::Delete))?;
        Ok(true)
    }

    /// Undo the latest action in `log` and revert the affected shape.
    pub fn undo<S: HistoryStore>(&mut self, log: &mut HistoryLog<S>) -> StorageResult<bool> {
        let Some(record) = log.undo()? else {
            return Ok(false);
        };
        let offset = log.undone_count().saturating_sub(1);
        let previous = log.previous_state(offset).cloned();
        Ok(self.revert_record(&record, previous.as_ref()))
    }

    /// Redo the latest undone action in `log` and re-apply it.
    pub fn redo<S: HistoryStore>(&mut self, log: &mut HistoryLog<S>) -> StorageResult<bool> {
        let Some(record) = log.redo()? else {
            return Ok(false);
        };
        Ok(self.apply_record(&record))
    }

    /// Bring the shape to the state `record` describes.
    ///
    /// Delete records remove the shape; anything else restores its geometry,
    /// re-inserting it under the same id if it is missing.
    pub fn apply_record(&mut self, record: &HistoryRecord) -> bool {
        match record.action_type {
            ActionType::Delete => self.remove_shape(record.id).is_some(),
            ActionType::Drawing | ActionType::Moving | ActionType::Resizing => self.restore(record),
        }
    }

    /// Revert `record` to `previous`, the shape's prior recorded state.
    ///
    /// Without a prior state the shape did not exist before and is removed.
    pub fn revert_record(&mut self, record: &HistoryRecord, previous: Option<&HistoryRecord>) -> bool {
        match previous {
            Some(prev) => self.restore(prev),
            None => self.remove_shape(record.id).is_some(),
        }
    }

    fn restore(&mut self, record: &HistoryRecord) -> bool {
        if let Some(shape) = self.get_mut(record.id) {
            return shape.set_geometry(record.geometry.clone());
        }
        match record.to_shape() {
            Some(shape) => {
                self.add_shape(shape);
                true
            }
            None => {
                log::warn!("Cannot rebuild {} #{} from history", record.kind, record.id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStore, MemoryStore};

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut doc = CanvasDocument::new();
        let a = doc.create(ShapeKind::Rectangle, Coordinates::new(0.0, 0.0, 1.0, 1.0));
        let b = doc.create(ShapeKind::Line, Coordinates::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(a, Some(1));
        assert_eq!(b, Some(2));
        assert_eq!(doc.create(ShapeKind::Selection, Coordinates::ZERO), None);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_draw_rectangle_backwards_then_normalize() {
        let mut doc = CanvasDocument::new();
        let id = doc
            .create(ShapeKind::Rectangle, Coordinates::new(50.0, 80.0, 50.0, 80.0))
            .unwrap();
        assert!(doc.update_drawing(id, Point::new(10.0, 20.0)));
        assert_eq!(
            doc.normalize_shape(id),
            Some(Coordinates::new(10.0, 20.0, 50.0, 80.0))
        );
    }

    #[test]
    fn test_pencil_drawing() {
        let mut doc = CanvasDocument::new();
        let id = doc.create(ShapeKind::Pencil, Vec::<StrokePoint>::new()).unwrap();
        for i in 0..5 {
            assert!(doc.append_point(id, StrokePoint::new(i as f64 * 10.0, 0.0)));
        }
        assert_eq!(doc.get(id).and_then(Shape::points).map(<[_]>::len), Some(5));
        assert_eq!(doc.normalize_shape(id), None);
        assert!(!doc.update_drawing(id, Point::new(1.0, 1.0)));
        assert_eq!(doc.shape_at(Point::new(25.0, 1.0)), Some((id, Anchor::Inside)));
    }

    #[test]
    fn test_resize_from_hit_anchor() {
        let mut doc = CanvasDocument::new();
        let id = doc
            .create(ShapeKind::Rectangle, Coordinates::new(10.0, 10.0, 110.0, 60.0))
            .unwrap();
        let (hit, anchor) = doc.shape_at(Point::new(111.0, 61.0)).unwrap();
        assert_eq!((hit, anchor), (id, Anchor::BottomRight));

        assert!(doc.resize_shape(id, Point::new(0.0, 0.0), anchor));
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(10.0, 10.0, 0.0, 0.0))
        );
        doc.normalize_shape(id);
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(0.0, 0.0, 10.0, 10.0))
        );
        assert!(!doc.resize_shape(id, Point::new(5.0, 5.0), Anchor::Inside));
    }

    #[test]
    fn test_pencil_is_not_resizable() {
        let mut doc = CanvasDocument::new();
        let id = doc
            .create(
                ShapeKind::Pencil,
                vec![StrokePoint::new(0.0, 0.0), StrokePoint::new(10.0, 0.0)],
            )
            .unwrap();
        assert!(!doc.resize_shape(id, Point::new(5.0, 5.0), Anchor::TopLeft));
    }

    #[test]
    fn test_undo_redo_draw_move_delete() {
        let mut doc = CanvasDocument::new();
        let mut log = HistoryLog::open(MemoryStore::new());

        let id = doc
            .create(ShapeKind::Arrow, Coordinates::new(0.0, 0.0, 100.0, 0.0))
            .unwrap();
        doc.commit(&mut log, id, ActionType::Drawing).unwrap();

        doc.move_shape(id, Vec2::new(10.0, 10.0));
        doc.commit(&mut log, id, ActionType::Moving).unwrap();

        assert!(doc.delete(&mut log, id).unwrap());
        assert!(doc.is_empty());

        // Undo delete: shape returns at its moved position
        assert!(doc.undo(&mut log).unwrap());
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(10.0, 10.0, 110.0, 10.0))
        );

        // Undo move: back to the drawn position
        assert!(doc.undo(&mut log).unwrap());
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(0.0, 0.0, 100.0, 0.0))
        );

        // Undo draw: gone
        assert!(doc.undo(&mut log).unwrap());
        assert!(doc.get(id).is_none());
        assert!(!doc.undo(&mut log).unwrap());

        // Redo all three
        assert!(doc.redo(&mut log).unwrap());
        assert!(doc.get(id).is_some());
        assert!(doc.redo(&mut log).unwrap());
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(10.0, 10.0, 110.0, 10.0))
        );
        assert!(doc.redo(&mut log).unwrap());
        assert!(doc.is_empty());
        assert!(!doc.redo(&mut log).unwrap());
    }

    #[test]
    fn test_new_action_after_undo_discards_redo() {
        let mut doc = CanvasDocument::new();
        let mut log = HistoryLog::open(MemoryStore::new());

        let a = doc
            .create(ShapeKind::Line, Coordinates::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        doc.commit(&mut log, a, ActionType::Drawing).unwrap();
        doc.move_shape(a, Vec2::new(5.0, 0.0));
        doc.commit(&mut log, a, ActionType::Moving).unwrap();

        doc.undo(&mut log).unwrap();
        let b = doc
            .create(ShapeKind::Rectangle, Coordinates::new(0.0, 0.0, 5.0, 5.0))
            .unwrap();
        doc.commit(&mut log, b, ActionType::Drawing).unwrap();

        assert!(!log.can_redo());
        assert_eq!(log.records().len(), 2);
        assert!(!doc.redo(&mut log).unwrap());
    }

    #[test]
    fn test_apply_record_reinserts_missing_shape() {
        let mut doc = CanvasDocument::new();
        let record = HistoryRecord::new(
            42,
            ActionType::Resizing,
            ShapeKind::Rectangle,
            Coordinates::new(1.0, 1.0, 2.0, 2.0).into(),
        );
        assert!(doc.apply_record(&record));
        assert!(doc.get(42).is_some());
        // Ids continue after restored shapes
        let next = doc.create(ShapeKind::Line, Coordinates::ZERO);
        assert_eq!(next, Some(43));
    }

    #[test]
    fn test_failed_undo_keeps_shapes_and_log_in_step() {
        let store = FailingStore::default();
        let failing = store.failing.clone();
        let mut log = HistoryLog::open(store);
        let mut doc = CanvasDocument::new();

        let id = doc
            .create(ShapeKind::Line, Coordinates::new(0.0, 0.0, 10.0, 0.0))
            .unwrap();
        doc.commit(&mut log, id, ActionType::Drawing).unwrap();
        doc.move_shape(id, Vec2::new(50.0, 0.0));
        doc.commit(&mut log, id, ActionType::Moving).unwrap();

        failing.set(true);
        assert!(doc.undo(&mut log).is_err());
        assert_eq!(log.undone_count(), 0);
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(50.0, 0.0, 60.0, 0.0))
        );

        failing.set(false);
        assert!(doc.undo(&mut log).unwrap());
        assert_eq!(
            doc.get(id).and_then(Shape::coordinates),
            Some(Coordinates::new(0.0, 0.0, 10.0, 0.0))
        );
        assert_eq!(log.undone_count(), 1);
    }
}
