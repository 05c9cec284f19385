//! Zoom manager: owns the view transform and its undo history.
//!
//! Every operation that changes the transform records the previous one, so
//! the host can step back through zoom, fit, and zoom-window actions. All
//! scale changes are clamped to the configured range. Operations that would
//! leave the transform unchanged do not touch the history.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use std::collections::VecDeque;

use tracing::debug;

use crate::bounds::Bounds;
use crate::consts::{MAX_SCALE, MIN_MARQUEE_PX, MIN_SCALE, ZOOM_HISTORY_LIMIT, ZOOM_STEP};
use crate::mode::is_click;
use crate::transform::{Point, ViewTransform, Viewport};

/// Limits and step size for a [`ZoomManager`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplicative factor for one zoom-in step; zoom-out uses its inverse.
    pub step: f64,
    /// Oldest entries are dropped once the history reaches this length.
    pub history_limit: usize,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { min_scale: MIN_SCALE, max_scale: MAX_SCALE, step: ZOOM_STEP, history_limit: ZOOM_HISTORY_LIMIT }
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Owns the current [`ViewTransform`] and a bounded undo stack.
#[derive(Debug, Clone)]
pub struct ZoomManager {
    transform: ViewTransform,
    initial: ViewTransform,
    history: VecDeque<ViewTransform>,
    config: ZoomConfig,
}

impl ZoomManager {
    #[must_use]
    pub fn new(initial: ViewTransform, config: ZoomConfig) -> Self {
        Self { transform: initial, initial, history: VecDeque::new(), config }
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Replace the transform outright (e.g. after a pan). Returns `false` when
    /// nothing changed.
    pub fn set_transform(&mut self, next: ViewTransform) -> bool {
        if next == self.transform {
            return false;
        }
        self.history.push_back(self.transform);
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
        self.transform = next;
        true
    }

    /// Scale by `factor` while keeping the world point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64, viewport: Viewport) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        self.scale_around(anchor, self.transform.scale * factor, viewport)
    }

    pub fn zoom_in(&mut self, anchor: Point, viewport: Viewport) -> bool {
        self.zoom_at(anchor, self.config.step, viewport)
    }

    pub fn zoom_out(&mut self, anchor: Point, viewport: Viewport) -> bool {
        self.zoom_at(anchor, 1.0 / self.config.step, viewport)
    }

    /// Jump to an absolute scale, anchored at `anchor`.
    pub fn set_scale(&mut self, scale: f64, anchor: Point, viewport: Viewport) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            return false;
        }
        self.scale_around(anchor, scale, viewport)
    }

    fn scale_around(&mut self, anchor: Point, scale: f64, viewport: Viewport) -> bool {
        let scale = self.config.clamp_scale(scale);
        let world = self.transform.screen_to_world(anchor, viewport);
        let next = ViewTransform {
            scale,
            offset_x: anchor.x - world.x * scale,
            offset_y: viewport.height - anchor.y - world.y * scale,
        };
        self.set_transform(next)
    }

    /// Fit world-space `bounds` into the viewport with `padding_px` on every
    /// side and center it. Zero-size bounds keep the current scale and are
    /// only centered.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, viewport: Viewport, padding_px: f64) -> bool {
        if !bounds.min.is_finite() || !bounds.max.is_finite() {
            return false;
        }
        let mut avail_w = viewport.width - 2.0 * padding_px;
        let mut avail_h = viewport.height - 2.0 * padding_px;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            avail_w = viewport.width;
            avail_h = viewport.height;
        }

        let fit_x = if bounds.width() > 0.0 { avail_w / bounds.width() } else { f64::INFINITY };
        let fit_y = if bounds.height() > 0.0 { avail_h / bounds.height() } else { f64::INFINITY };
        let fitted = fit_x.min(fit_y);
        let scale = if fitted.is_finite() && fitted > 0.0 {
            self.config.clamp_scale(fitted)
        } else {
            self.transform.scale
        };

        let center = bounds.center();
        let next = ViewTransform {
            scale,
            offset_x: viewport.width * 0.5 - center.x * scale,
            offset_y: viewport.height * 0.5 - center.y * scale,
        };
        debug!(scale, offset_x = next.offset_x, offset_y = next.offset_y, "fit to bounds");
        self.set_transform(next)
    }

    /// Zoom so the screen box dragged from `start` to `end` fills the viewport.
    /// Drags too small to be a marquee are ignored.
    pub fn zoom_window(&mut self, start: Point, end: Point, viewport: Viewport) -> bool {
        if is_click(start, end, MIN_MARQUEE_PX) {
            return false;
        }
        let world = self.transform.screen_bounds_to_world(&Bounds::from_corners(start, end), viewport);
        self.fit_to_bounds(&world, viewport, 0.0)
    }

    /// Return to the transform the manager was created with.
    pub fn reset(&mut self) -> bool {
        self.set_transform(self.initial)
    }

    /// Restore the previous transform. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.transform = previous;
                true
            }
            None => false,
        }
    }
}
