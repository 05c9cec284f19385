#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the viewport in screen space.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Screen rectangle of the canvas element. Marquee points are relative to its
/// top-left corner, so only the size feeds the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// World-to-screen transform for the drawing canvas.
///
/// `scale` is screen pixels per world unit and must be positive; that is the
/// caller's responsibility and is not checked. `offset_x` / `offset_y` are in
/// screen pixels, with `offset_y` measured up from the bottom edge of the
/// viewport because world y grows upward while screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self { scale, offset_x, offset_y }
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport: Viewport) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (viewport.height - screen.y - self.offset_y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport: Viewport) -> Point {
        Point {
            x: world.x * self.scale + self.offset_x,
            y: viewport.height - (world.y * self.scale + self.offset_y),
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Convert a world-space distance to screen pixels.
    #[must_use]
    pub fn world_dist_to_screen(&self, world_dist: f64) -> f64 {
        world_dist * self.scale
    }

    /// Map a screen-space box into world space. The y flip swaps which corner
    /// is the minimum, so the result is re-normalized.
    #[must_use]
    pub fn screen_bounds_to_world(&self, bounds: &Bounds, viewport: Viewport) -> Bounds {
        Bounds::from_corners(
            self.screen_to_world(bounds.min, viewport),
            self.screen_to_world(bounds.max, viewport),
        )
    }

    /// Project world-space vertices into screen space.
    #[must_use]
    pub fn project(&self, vertices: &[Point], viewport: Viewport) -> Vec<Point> {
        vertices.iter().map(|&v| self.world_to_screen(v, viewport)).collect()
    }
}
