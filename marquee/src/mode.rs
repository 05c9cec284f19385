#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use serde::{Deserialize, Serialize};

use crate::transform::Point;

/// Marquee selection policy, chosen by drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Left-to-right drag: items must be fully inside the marquee.
    Window,
    /// Right-to-left drag: any item touching the marquee is selected.
    Crossing,
}

impl SelectionMode {
    /// Classify a drag. Only the x direction matters; a purely vertical drag
    /// is a window selection.
    #[must_use]
    pub fn from_drag(start: Point, end: Point) -> Self {
        if start.x > end.x { Self::Crossing } else { Self::Window }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Crossing => "crossing",
        }
    }
}

/// Whether a drag is too small to count as a marquee on both axes. Callers use
/// this to route tiny drags to click selection instead.
#[must_use]
pub fn is_click(start: Point, end: Point, min_px: f64) -> bool {
    (end.x - start.x).abs() < min_px && (end.y - start.y).abs() < min_px
}
