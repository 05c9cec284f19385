//! Segment, polygon, and rectangle intersection primitives.
//!
//! All functions are pure and total: degenerate input (empty polygons, zero
//! length segments) yields `false` or a finite distance instead of an error.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::cmp::Ordering;

use crate::bounds::{Bounds, point_in_rect};
use crate::transform::Point;

/// Collinearity cutoff, relative to `|b - a| * |c - a|`.
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Signed area of the triangle `a, b, c` (times two). Positive when `c` is to
/// the left of `a -> b`.
#[must_use]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Which side of the line through `a -> b` the point `c` falls on:
/// `Greater` for left, `Less` for right, `Equal` when collinear.
#[must_use]
pub fn side(a: Point, b: Point, c: Point) -> Ordering {
    let d = orientation(a, b, c);
    if d.abs() <= COLLINEAR_EPSILON * a.distance(b) * a.distance(c) {
        Ordering::Equal
    } else if d > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Whether `p` lies inside the axis-aligned extent of segment `a -> b`.
/// Only meaningful when `p` is already known to be collinear with it.
#[must_use]
pub fn within_extent(p: Point, a: Point, b: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn straddles(d1: Ordering, d2: Ordering) -> bool {
    d1 != Ordering::Equal && d2 != Ordering::Equal && d1 != d2
}

/// Segment-segment intersection.
///
/// Two segments intersect when each strictly straddles the line through the
/// other, or when any endpoint is collinear with the other segment and within
/// its extent. Touching and overlapping collinear segments count.
#[must_use]
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = side(q1, q2, p1);
    let d2 = side(q1, q2, p2);
    let d3 = side(p1, p2, q1);
    let d4 = side(p1, p2, q2);

    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }

    (d1 == Ordering::Equal && within_extent(p1, q1, q2))
        || (d2 == Ordering::Equal && within_extent(p2, q1, q2))
        || (d3 == Ordering::Equal && within_extent(q1, p1, p2))
        || (d4 == Ordering::Equal && within_extent(q2, p1, p2))
}

/// Shortest distance from `p` to segment `a -> b`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + dx * t, a.y + dy * t))
}

/// Ray-casting point-in-polygon. The polygon is implicitly closed. Fewer than
/// three vertices never contain anything.
#[must_use]
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for (i, vi) in polygon.iter().enumerate() {
        let vj = polygon[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Consecutive vertex pairs, plus the closing pair when `closed`.
pub fn edges(vertices: &[Point], closed: bool) -> impl Iterator<Item = (Point, Point)> + '_ {
    let closing = match (closed, vertices.first(), vertices.last()) {
        (true, Some(&first), Some(&last)) if vertices.len() > 2 => Some((last, first)),
        _ => None,
    };
    vertices.windows(2).map(|w| (w[0], w[1])).chain(closing)
}

/// Whether segment `a -> b` crosses one of the rectangle's four edges.
#[must_use]
pub fn segment_crosses_rect_edge(a: Point, b: Point, rect: &Bounds) -> bool {
    let c = rect.corners();
    (0..4).any(|i| segments_intersect(a, b, c[i], c[(i + 1) % 4]))
}

/// Whether any part of segment `a -> b` lies inside or on the rectangle.
#[must_use]
pub fn segment_intersects_rect(a: Point, b: Point, rect: &Bounds) -> bool {
    point_in_rect(a, rect) || point_in_rect(b, rect) || segment_crosses_rect_edge(a, b, rect)
}

/// Whether an open or closed polyline touches the rectangle. Only edges are
/// considered; a closed polyline does not count as filled here.
#[must_use]
pub fn polyline_intersects_rect(vertices: &[Point], closed: bool, rect: &Bounds) -> bool {
    match vertices {
        [] => false,
        [only] => point_in_rect(*only, rect),
        _ => edges(vertices, closed).any(|(a, b)| segment_intersects_rect(a, b, rect)),
    }
}

/// True polygon-vs-rectangle overlap.
///
/// 1. any polygon vertex inside the rectangle;
/// 2. any polygon edge crossing any rectangle edge;
/// 3. the rectangle center inside the polygon (marquee inside a large shape).
#[must_use]
pub fn polygon_intersects_rect(polygon: &[Point], rect: &Bounds) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if polygon.iter().any(|&v| point_in_rect(v, rect)) {
        return true;
    }
    if edges(polygon, true).any(|(a, b)| segment_crosses_rect_edge(a, b, rect)) {
        return true;
    }
    point_in_polygon(rect.center(), polygon)
}

/// Whether a filled disc overlaps the rectangle.
#[must_use]
pub fn circle_intersects_rect(center: Point, radius: f64, rect: &Bounds) -> bool {
    let nearest = Point::new(
        center.x.max(rect.min.x).min(rect.max.x),
        center.y.max(rect.min.y).min(rect.max.y),
    );
    center.distance(nearest) <= radius
}
