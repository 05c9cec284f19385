//! Scene files: the selectable collections of one drawing, loaded from JSON.
//!
//! The entity shape follows the viewer's export format (`id`, `type`, `layer`,
//! `visible`, plus per-type geometry fields). Every collection is optional in
//! the file and defaults to empty.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bounds::{Bounds, vertices_bounds};
use crate::entity::{ColorLayer, Entity, EntityGeometry, Overlay};
use crate::universal::SelectionInput;

/// Error returned when loading a [`Scene`].
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The file could not be read.
    #[error("failed to read scene {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The contents are not a valid scene document.
    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two items share an id. Ids must be unique across all collections
    /// because selection results report them in one flat list.
    #[error("duplicate id `{0}`")]
    DuplicateId(String),
    /// An item has a NaN or infinite coordinate.
    #[error("`{id}` has a non-finite coordinate")]
    NonFinite { id: String },
    /// A circle was given a negative radius.
    #[error("circle `{id}` has negative radius {radius}")]
    NegativeRadius { id: String, radius: f64 },
}

/// All selectable items of one drawing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub overlays: Vec<Overlay>,
    #[serde(default)]
    pub color_layers: Vec<ColorLayer>,
}

impl Scene {
    /// Parse and validate a scene document.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed JSON and a validation
    /// variant for duplicate ids or invalid coordinates.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        debug!(
            entities = scene.entities.len(),
            overlays = scene.overlays.len(),
            color_layers = scene.color_layers.len(),
            "scene loaded"
        );
        Ok(scene)
    }

    /// Read, parse, and validate a scene file.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] when the file cannot be read, otherwise as
    /// [`Scene::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }

    /// Check id uniqueness and coordinate sanity.
    ///
    /// Polygons too small to ever be selected are allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = HashSet::new();
        let mut claim = |id: &str| {
            if seen.insert(id.to_owned()) { Ok(()) } else { Err(SceneError::DuplicateId(id.to_owned())) }
        };

        for entity in &self.entities {
            claim(&entity.id)?;
            if !entity.geometry.points().iter().all(|p| p.is_finite()) {
                return Err(SceneError::NonFinite { id: entity.id.clone() });
            }
            if let EntityGeometry::Circle { radius, .. } = entity.geometry {
                if !radius.is_finite() {
                    return Err(SceneError::NonFinite { id: entity.id.clone() });
                }
                if radius < 0.0 {
                    return Err(SceneError::NegativeRadius { id: entity.id.clone(), radius });
                }
            }
        }

        for overlay in &self.overlays {
            claim(&overlay.id)?;
            if !overlay.vertices.iter().all(|p| p.is_finite()) {
                return Err(SceneError::NonFinite { id: overlay.id.clone() });
            }
            if overlay.vertices.len() < 3 {
                warn!(id = %overlay.id, vertices = overlay.vertices.len(), "overlay can never be selected");
            }
        }

        for layer in &self.color_layers {
            claim(&layer.id)?;
            if !layer.polygons.iter().flatten().all(|p| p.is_finite()) {
                return Err(SceneError::NonFinite { id: layer.id.clone() });
            }
            if layer.polygons.iter().all(|poly| poly.len() < 3) {
                warn!(id = %layer.id, polygons = layer.polygons.len(), "color layer can never be selected");
            }
        }

        Ok(())
    }

    /// World extents of everything selectable: visible entities, overlays,
    /// and visible color layers. `None` when there is nothing with extent.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let entities = self.entities.iter().filter(|e| e.visible).filter_map(Entity::bounds);
        let overlays = self.overlays.iter().filter_map(|o| vertices_bounds(&o.vertices));
        let layers = self.color_layers.iter().filter(|l| l.visible).filter_map(ColorLayer::bounds);
        entities.chain(overlays).chain(layers).reduce(|acc, b| acc.union(&b))
    }

    /// Borrow every collection as selection input.
    #[must_use]
    pub fn as_input(&self) -> SelectionInput<'_> {
        SelectionInput::new()
            .with_entities(&self.entities)
            .with_overlays(&self.overlays)
            .with_color_layers(&self.color_layers)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.overlays.is_empty() && self.color_layers.is_empty()
    }
}
