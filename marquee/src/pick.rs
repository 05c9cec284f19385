//! Per-kind selectors for entities, overlays, and color layers.
//!
//! Each selector applies the same policy: in [`SelectionMode::Window`] an item
//! matches only when its bounds sit entirely inside the query rectangle,
//! except that items thinner than the tolerance in either dimension fall back
//! to a bounds-overlap test so near-zero-width geometry stays selectable. In
//! [`SelectionMode::Crossing`] an item matches when its actual shape touches
//! the rectangle; bounding boxes alone would select items whose boxes overlap
//! the marquee while their outlines do not.
//!
//! Entities are tested in world space. Overlays and color layers are projected
//! into screen space first and tested against the screen marquee.

#[cfg(test)]
#[path = "pick_test.rs"]
mod pick_test;

use tracing::trace;

use crate::bounds::{Bounds, bounds_intersect, vertices_bounds};
use crate::entity::{ColorLayer, Entity, EntityGeometry, Overlay};
use crate::geom::{circle_intersects_rect, polygon_intersects_rect, polyline_intersects_rect, segment_intersects_rect};
use crate::mode::SelectionMode;
use crate::transform::{Point, ViewTransform, Viewport};

/// A query rectangle with the policy and tolerance to apply, all in the same
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub rect: Bounds,
    pub mode: SelectionMode,
    pub tolerance: f64,
}

impl Query {
    #[must_use]
    pub fn new(rect: Bounds, mode: SelectionMode, tolerance: f64) -> Self {
        Self { rect, mode, tolerance }
    }

    /// Window-mode test on item bounds, with the thin-item fallback.
    #[must_use]
    pub fn window_contains(&self, item: &Bounds) -> bool {
        if item.is_degenerate(self.tolerance) {
            bounds_intersect(item, &self.rect)
        } else {
            self.rect.contains_bounds(item)
        }
    }
}

/// Whether a single entity matches the query (world space).
#[must_use]
pub fn entity_matches(entity: &Entity, query: &Query) -> bool {
    if !entity.visible {
        return false;
    }
    let Some(bounds) = entity.bounds() else {
        return false;
    };
    match query.mode {
        SelectionMode::Window => query.window_contains(&bounds),
        SelectionMode::Crossing => {
            // Cheap reject before the exact shape test.
            bounds_intersect(&bounds, &query.rect) && geometry_touches(&entity.geometry, &query.rect)
        }
    }
}

fn geometry_touches(geometry: &EntityGeometry, rect: &Bounds) -> bool {
    match geometry {
        EntityGeometry::Line { start, end } => segment_intersects_rect(*start, *end, rect),
        EntityGeometry::Circle { center, radius } => circle_intersects_rect(*center, radius.abs(), rect),
        EntityGeometry::Polyline { vertices, closed } => {
            polyline_intersects_rect(vertices, *closed, rect) || (*closed && polygon_intersects_rect(vertices, rect))
        }
        EntityGeometry::Rectangle { corner1, corner2 } => {
            polygon_intersects_rect(&Bounds::from_corners(*corner1, *corner2).corners(), rect)
        }
        EntityGeometry::AngleMeasurement { vertex, point1, point2 } => {
            segment_intersects_rect(*vertex, *point1, rect) || segment_intersects_rect(*vertex, *point2, rect)
        }
    }
}

/// Ids of the entities matching a world-space query, in input order.
#[must_use]
pub fn select_entities<'a>(entities: &'a [Entity], query: &Query) -> Vec<&'a str> {
    entities
        .iter()
        .filter(|entity| {
            let hit = entity_matches(entity, query);
            trace!(id = %entity.id, kind = entity.geometry.kind_name(), hit, "entity tested");
            hit
        })
        .map(|entity| entity.id.as_str())
        .collect()
}

/// Whether one screen-space polygon matches a screen-space query.
#[must_use]
pub fn polygon_matches(polygon: &[Point], query: &Query) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    match query.mode {
        SelectionMode::Window => vertices_bounds(polygon).is_some_and(|b| query.window_contains(&b)),
        SelectionMode::Crossing => polygon_intersects_rect(polygon, &query.rect),
    }
}

/// Ids of the overlays matching a screen-space query, in input order.
#[must_use]
pub fn select_overlays<'a>(
    overlays: &'a [Overlay],
    query: &Query,
    transform: &ViewTransform,
    viewport: Viewport,
) -> Vec<&'a str> {
    overlays
        .iter()
        .filter(|overlay| {
            let screen = transform.project(&overlay.vertices, viewport);
            let hit = polygon_matches(&screen, query);
            trace!(id = %overlay.id, vertices = overlay.vertices.len(), hit, "overlay tested");
            hit
        })
        .map(|overlay| overlay.id.as_str())
        .collect()
}

/// Ids of the visible color layers with at least one matching polygon.
#[must_use]
pub fn select_color_layers<'a>(
    layers: &'a [ColorLayer],
    query: &Query,
    transform: &ViewTransform,
    viewport: Viewport,
) -> Vec<&'a str> {
    layers
        .iter()
        .filter(|layer| {
            if !layer.visible {
                return false;
            }
            let hit = layer
                .polygons
                .iter()
                .any(|poly| polygon_matches(&transform.project(poly, viewport), query));
            trace!(id = %layer.id, polygons = layer.polygons.len(), hit, "color layer tested");
            hit
        })
        .map(|layer| layer.id.as_str())
        .collect()
}
