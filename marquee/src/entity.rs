//! Selectable item types: drawing entities, overlay regions, and color layers.
//!
//! Items are owned by whichever subsystem produced them (the DXF importer, the
//! overlay editor, the color-layer panel). Selection only ever borrows them.
//! Entity coordinates are world units; overlay and color-layer vertices are
//! also stored in world units and projected to screen space at query time.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, vertices_bounds};
use crate::transform::Point;

/// Geometry of a drawing entity, tagged by `"type"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityGeometry {
    /// Straight segment between two endpoints.
    Line { start: Point, end: Point },
    /// Full circle.
    Circle { center: Point, radius: f64 },
    /// Chain of segments; `closed` adds the segment from the last vertex back to the first.
    Polyline {
        vertices: Vec<Point>,
        #[serde(default)]
        closed: bool,
    },
    /// Axis-aligned rectangle given by any two opposite corners.
    Rectangle { corner1: Point, corner2: Point },
    /// Angle dimension: two rays from `vertex` through `point1` and `point2`.
    AngleMeasurement { vertex: Point, point1: Point, point2: Point },
}

impl EntityGeometry {
    /// Short lowercase name of the geometry kind, for logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Polyline { .. } => "polyline",
            Self::Rectangle { .. } => "rectangle",
            Self::AngleMeasurement { .. } => "angle_measurement",
        }
    }

    /// World-space bounds, or `None` for a polyline without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Line { start, end } => Some(Bounds::from_corners(*start, *end)),
            Self::Circle { center, radius } => Some(Bounds::around(*center, radius.abs())),
            Self::Polyline { vertices, .. } => vertices_bounds(vertices),
            Self::Rectangle { corner1, corner2 } => Some(Bounds::from_corners(*corner1, *corner2)),
            Self::AngleMeasurement { vertex, point1, point2 } => vertices_bounds(&[*vertex, *point1, *point2]),
        }
    }

    /// Every defining point, used for validation.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { start, end } => vec![*start, *end],
            Self::Circle { center, .. } => vec![*center],
            Self::Polyline { vertices, .. } => vertices.clone(),
            Self::Rectangle { corner1, corner2 } => vec![*corner1, *corner2],
            Self::AngleMeasurement { vertex, point1, point2 } => vec![*vertex, *point1, *point2],
        }
    }
}

fn default_layer() -> String {
    "0".to_owned()
}

fn default_visible() -> bool {
    true
}

/// A drawing entity imported from DXF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity handle, unique within a scene.
    pub id: String,
    /// DXF layer name. Defaults to `"0"`.
    #[serde(default = "default_layer")]
    pub layer: String,
    /// Hidden entities are never selected.
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub geometry: EntityGeometry,
}

impl Entity {
    /// Visible entity on layer `"0"`.
    #[must_use]
    pub fn new(id: impl Into<String>, geometry: EntityGeometry) -> Self {
        Self { id: id.into(), layer: default_layer(), visible: true, geometry }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounds()
    }
}

/// A user-drawn overlay region (a single polygon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub id: String,
    pub vertices: Vec<Point>,
}

impl Overlay {
    #[must_use]
    pub fn new(id: impl Into<String>, vertices: Vec<Point>) -> Self {
        Self { id: id.into(), vertices }
    }
}

/// A color layer: a named set of filled polygons that toggles as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLayer {
    pub id: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub polygons: Vec<Vec<Point>>,
}

impl ColorLayer {
    #[must_use]
    pub fn new(id: impl Into<String>, polygons: Vec<Vec<Point>>) -> Self {
        Self { id: id.into(), visible: true, polygons }
    }

    /// Bounds over all polygons, or `None` when every polygon is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons
            .iter()
            .filter_map(|poly| vertices_bounds(poly))
            .reduce(|acc, b| acc.union(&b))
    }
}
