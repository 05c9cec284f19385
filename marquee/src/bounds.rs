//! Axis-aligned bounding boxes.
//!
//! Bounds are always derived on demand from item geometry or from the two
//! drag corners of a marquee. They are never stored alongside items, so every
//! query recomputes them from current coordinates.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use serde::{Deserialize, Serialize};

use crate::transform::Point;

/// Axis-aligned box with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Build bounds from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square box of half-size `radius` around `center`.
    #[must_use]
    pub fn around(center: Point, radius: f64) -> Self {
        Self {
            min: Point::new(center.x - radius, center.y - radius),
            max: Point::new(center.x + radius, center.y + radius),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    /// Whether `other` lies entirely inside `self`, edges inclusive.
    #[must_use]
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        point_in_rect(other.min, self) && point_in_rect(other.max, self)
    }

    /// Grow the box by `amount` on every side.
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            min: Point::new(self.min.x - amount, self.min.y - amount),
            max: Point::new(self.max.x + amount, self.max.y + amount),
        }
    }

    /// Smallest box covering both inputs.
    #[must_use]
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// The four corners in counter-clockwise order starting at `min`.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Whether either side is thinner than `tolerance`.
    #[must_use]
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.width() < tolerance || self.height() < tolerance
    }
}

/// Tight bounds around `vertices`, or `None` when there are none.
#[must_use]
pub fn vertices_bounds(vertices: &[Point]) -> Option<Bounds> {
    let (first, rest) = vertices.split_first()?;
    let mut bounds = Bounds { min: *first, max: *first };
    for v in rest {
        bounds.min.x = bounds.min.x.min(v.x);
        bounds.min.y = bounds.min.y.min(v.y);
        bounds.max.x = bounds.max.x.max(v.x);
        bounds.max.y = bounds.max.y.max(v.y);
    }
    Some(bounds)
}

/// Point-in-box test, inclusive on all four edges.
#[must_use]
pub fn point_in_rect(p: Point, bounds: &Bounds) -> bool {
    p.x >= bounds.min.x && p.x <= bounds.max.x && p.y >= bounds.min.y && p.y <= bounds.max.y
}

/// True unless the boxes are strictly separated along an axis. Touching edges
/// count as intersecting.
#[must_use]
pub fn bounds_intersect(a: &Bounds, b: &Bounds) -> bool {
    !(a.max.x < b.min.x || b.max.x < a.min.x || a.max.y < b.min.y || b.max.y < a.min.y)
}
