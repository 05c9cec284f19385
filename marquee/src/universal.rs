//! Universal marquee selector: one drag, every selectable collection.
//!
//! [`MarqueeSelector::select`] is the pure query. It classifies the drag,
//! builds the marquee in screen space (for overlays and color layers) and in
//! world space (for drawing entities), runs each supplied collection through
//! its per-kind selector, and returns one flat id list plus a per-kind
//! breakdown. Acting on the selection is a separate step:
//! [`dispatch_selected`] walks a finished result and invokes a host callback
//! per id, and [`MarqueeSelector::perform_selection`] chains the two for hosts
//! that want both in one call.

#[cfg(test)]
#[path = "universal_test.rs"]
mod universal_test;

use serde::Serialize;
use tracing::debug;

use crate::bounds::Bounds;
use crate::config::SelectorConfig;
use crate::entity::{ColorLayer, Entity, Overlay};
use crate::mode::SelectionMode;
use crate::pick::{self, Query};
use crate::transform::{CanvasRect, Point, ViewTransform};

/// Borrowed item collections for one selection. `None` means the collection
/// was not supplied at all, which is reported differently from an empty one
/// in [`DebugInfo`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionInput<'a> {
    pub entities: Option<&'a [Entity]>,
    pub overlays: Option<&'a [Overlay]>,
    pub color_layers: Option<&'a [ColorLayer]>,
}

impl<'a> SelectionInput<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entities(mut self, entities: &'a [Entity]) -> Self {
        self.entities = Some(entities);
        self
    }

    #[must_use]
    pub fn with_overlays(mut self, overlays: &'a [Overlay]) -> Self {
        self.overlays = Some(overlays);
        self
    }

    #[must_use]
    pub fn with_color_layers(mut self, color_layers: &'a [ColorLayer]) -> Self {
        self.color_layers = Some(color_layers);
        self
    }
}

/// Matched ids split by collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub entity_ids: Vec<String>,
    pub overlay_ids: Vec<String>,
    pub layer_ids: Vec<String>,
}

/// Diagnostics attached when [`SelectorConfig::collect_debug`] is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugInfo {
    /// The marquee mapped into world space.
    pub world_bounds: Bounds,
    pub tolerance_px: f64,
    pub tolerance_world: f64,
    /// Number of items examined per collection; `None` when not supplied.
    pub entities_tested: Option<usize>,
    pub overlays_tested: Option<usize>,
    pub color_layers_tested: Option<usize>,
}

/// Outcome of one marquee selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    /// Every matched id: entities first, then overlays, then color layers.
    pub selected_ids: Vec<String>,
    pub selection_type: SelectionMode,
    /// The marquee in screen space.
    pub selection_bounds: Bounds,
    pub breakdown: Breakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
}

impl SelectionResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }
}

/// A selection together with the number of callbacks it triggered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformedSelection {
    #[serde(flatten)]
    pub result: SelectionResult,
    pub callbacks_executed: usize,
}

/// Stateless marquee selector configured once at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarqueeSelector {
    config: SelectorConfig,
}

impl MarqueeSelector {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select every item touched by the drag from `start` to `end`.
    ///
    /// `start` and `end` are canvas-relative screen points; `canvas` supplies
    /// the viewport size. Empty collections and zero-size marquees simply
    /// produce an empty result.
    #[must_use]
    pub fn select(
        &self,
        start: Point,
        end: Point,
        transform: &ViewTransform,
        canvas: &CanvasRect,
        input: &SelectionInput<'_>,
    ) -> SelectionResult {
        let mode = SelectionMode::from_drag(start, end);
        let viewport = canvas.viewport();
        let screen_bounds = Bounds::from_corners(start, end);
        let world_bounds = transform.screen_bounds_to_world(&screen_bounds, viewport);
        let tolerance_px = self.config.tolerance_px;
        let tolerance_world = transform.screen_dist_to_world(tolerance_px);

        let world_query = Query::new(world_bounds, mode, tolerance_world);
        let screen_query = Query::new(screen_bounds, mode, tolerance_px);

        let breakdown = Breakdown {
            entity_ids: owned(input.entities.map(|e| pick::select_entities(e, &world_query))),
            overlay_ids: owned(input.overlays.map(|o| pick::select_overlays(o, &screen_query, transform, viewport))),
            layer_ids: owned(
                input
                    .color_layers
                    .map(|l| pick::select_color_layers(l, &screen_query, transform, viewport)),
            ),
        };

        let selected_ids: Vec<String> = breakdown
            .entity_ids
            .iter()
            .chain(&breakdown.overlay_ids)
            .chain(&breakdown.layer_ids)
            .cloned()
            .collect();

        debug!(
            mode = mode.as_str(),
            selected = selected_ids.len(),
            entities = breakdown.entity_ids.len(),
            overlays = breakdown.overlay_ids.len(),
            layers = breakdown.layer_ids.len(),
            "marquee selection"
        );

        let debug_info = self.config.collect_debug.then(|| DebugInfo {
            world_bounds,
            tolerance_px,
            tolerance_world,
            entities_tested: input.entities.map(<[Entity]>::len),
            overlays_tested: input.overlays.map(<[Overlay]>::len),
            color_layers_tested: input.color_layers.map(<[ColorLayer]>::len),
        });

        SelectionResult { selected_ids, selection_type: mode, selection_bounds: screen_bounds, breakdown, debug_info }
    }

    /// [`Self::select`] followed by [`dispatch_selected`].
    ///
    /// The callback runs only when both it and `position` are supplied;
    /// otherwise `callbacks_executed` is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn perform_selection(
        &self,
        start: Point,
        end: Point,
        transform: &ViewTransform,
        canvas: &CanvasRect,
        input: &SelectionInput<'_>,
        position: Option<Point>,
        on_selected: Option<&mut dyn FnMut(&str, Point)>,
    ) -> PerformedSelection {
        let result = self.select(start, end, transform, canvas, input);
        let callbacks_executed = match (position, on_selected) {
            (Some(position), Some(callback)) => dispatch_selected(&result, position, callback),
            _ => 0,
        };
        PerformedSelection { result, callbacks_executed }
    }
}

/// Invoke `callback` once per selected id, in result order. Returns the
/// number of invocations.
pub fn dispatch_selected<F>(result: &SelectionResult, position: Point, mut callback: F) -> usize
where
    F: FnMut(&str, Point),
{
    for id in &result.selected_ids {
        callback(id, position);
    }
    result.selected_ids.len()
}

fn owned(ids: Option<Vec<&str>>) -> Vec<String> {
    ids.unwrap_or_default().into_iter().map(str::to_owned).collect()
}
