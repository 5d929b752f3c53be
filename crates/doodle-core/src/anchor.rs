//! Anchor vocabulary produced by hit-testing and cursor styles derived from it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named handle position on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// First endpoint of a line or arrow.
    Start,
    /// Second endpoint of a line or arrow.
    End,
    /// Interior of a rectangle or the body of a stroke.
    Inside,
}

impl Anchor {
    /// All anchors, corners first.
    pub const ALL: [Anchor; 7] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::Start,
        Anchor::End,
        Anchor::Inside,
    ];

    /// Name used by the UI layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::TopLeft => "topLeft",
            Anchor::TopRight => "topRight",
            Anchor::BottomLeft => "bottomLeft",
            Anchor::BottomRight => "bottomRight",
            Anchor::Start => "start",
            Anchor::End => "end",
            Anchor::Inside => "inside",
        }
    }

    /// Whether dragging this anchor resizes the shape (as opposed to moving it).
    pub fn is_resize_handle(self) -> bool {
        !matches!(self, Anchor::Inside)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown anchor name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown anchor: {0}")]
pub struct ParseAnchorError(pub String);

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| ParseAnchorError(s.to_string()))
    }
}

/// Pointer cursor style for an anchor under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Diagonal resize, north-west to south-east.
    NwseResize,
    /// Diagonal resize, north-east to south-west.
    NeswResize,
    Move,
    #[default]
    Default,
}

impl Cursor {
    /// CSS cursor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Cursor::NwseResize => "nwse-resize",
            Cursor::NeswResize => "nesw-resize",
            Cursor::Move => "move",
            Cursor::Default => "default",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor to show while hovering `anchor`. No anchor maps to the default pointer.
pub fn cursor_for_position(anchor: Option<Anchor>) -> Cursor {
    match anchor {
        Some(Anchor::TopLeft | Anchor::BottomRight | Anchor::Start | Anchor::End) => {
            Cursor::NwseResize
        }
        Some(Anchor::TopRight | Anchor::BottomLeft) => Cursor::NeswResize,
        Some(Anchor::Inside) => Cursor::Move,
        None => Cursor::Default,
    }
}
