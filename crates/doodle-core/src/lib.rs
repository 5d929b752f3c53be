//! Doodle Core Library
//!
//! Non-visual core of the Doodle whiteboard: hit-testing, coordinate
//! normalization and resize, arrowhead and freehand path geometry, and the
//! persisted undo/redo log.

pub mod anchor;
pub mod canvas;
pub mod geometry;
pub mod history;
pub mod normalize;
pub mod paths;
pub mod resize;
pub mod shapes;
pub mod storage;

pub use anchor::{Anchor, Cursor, cursor_for_position};
pub use canvas::CanvasDocument;
pub use geometry::{LINE_TOLERANCE, NEAR_POINT_TOLERANCE, distance, near_point, on_line};
pub use history::{ActionType, HistoryLog, HistoryRecord, HistoryState};
pub use hit_test::{PENCIL_LINE_TOLERANCE, position_within_element, shape_at_position};
pub use normalize::adjust_element_coordinates;
pub use paths::{ARROW_HEAD_SIZE, arrow_head_length, arrow_path, arrow_points, smooth_stroke_path};
pub use resize::resized_coordinates;
pub use shapes::{Coordinates, Geometry, Shape, ShapeId, ShapeKind, ShapeTrait, StrokePoint};
pub use storage::{HistoryStore, MemoryStore, StorageError, StorageResult};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
