//! Anchor-driven resize of a shape's coordinates.

use crate::anchor::Anchor;
use crate::shapes::Coordinates;
use kurbo::Point;

/// Move the slots named by `anchor` to `pointer`, keeping the opposite corner fixed.
///
/// `Inside` and a missing anchor are caller errors; they yield
/// [`Coordinates::ZERO`].
pub fn resized_coordinates(pointer: Point, anchor: Option<Anchor>, coords: Coordinates) -> Coordinates {
    let Coordinates { x1, y1, x2, y2 } = coords;
    let Point { x, y } = pointer;
    match anchor {
        Some(Anchor::TopLeft | Anchor::Start) => Coordinates::new(x, y, x2, y2),
        Some(Anchor::TopRight) => Coordinates::new(x1, y, x, y2),
        Some(Anchor::BottomLeft) => Coordinates::new(x, y1, x2, y),
        Some(Anchor::BottomRight | Anchor::End) => Coordinates::new(x1, y1, x, y),
        Some(Anchor::Inside) | None => {
            log::debug!("resize requested without a resize anchor: {anchor:?}");
            Coordinates::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Coordinates = Coordinates::new(10.0, 20.0, 110.0, 70.0);

    #[test]
    fn test_corner_mapping() {
        let p = Point::new(0.0, 5.0);
        assert_eq!(
            resized_coordinates(p, Some(Anchor::TopLeft), BOX),
            Coordinates::new(0.0, 5.0, 110.0, 70.0)
        );
        assert_eq!(
            resized_coordinates(p, Some(Anchor::TopRight), BOX),
            Coordinates::new(10.0, 5.0, 0.0, 70.0)
        );
        assert_eq!(
            resized_coordinates(p, Some(Anchor::BottomLeft), BOX),
            Coordinates::new(0.0, 20.0, 110.0, 5.0)
        );
        assert_eq!(
            resized_coordinates(p, Some(Anchor::BottomRight), BOX),
            Coordinates::new(10.0, 20.0, 0.0, 5.0)
        );
    }

    #[test]
    fn test_endpoint_mapping() {
        let p = Point::new(-4.0, 9.0);
        assert_eq!(
            resized_coordinates(p, Some(Anchor::Start), BOX),
            resized_coordinates(p, Some(Anchor::TopLeft), BOX)
        );
        assert_eq!(
            resized_coordinates(p, Some(Anchor::End), BOX),
            resized_coordinates(p, Some(Anchor::BottomRight), BOX)
        );
    }

    #[test]
    fn test_non_resize_anchor_gives_zero_box() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(resized_coordinates(p, Some(Anchor::Inside), BOX), Coordinates::ZERO);
        assert_eq!(resized_coordinates(p, None, BOX), Coordinates::ZERO);
    }
}
