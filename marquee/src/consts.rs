//! Shared numeric constants for the marquee crate.

// ── Selection ───────────────────────────────────────────────────

/// Default selection tolerance in screen pixels. Items thinner than this in
/// either dimension fall back to an intersect test in window mode.
pub const DEFAULT_TOLERANCE_PX: f64 = 5.0;

/// Drags shorter than this (in screen pixels, both axes) are treated as clicks.
pub const MIN_MARQUEE_PX: f64 = 3.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest scale the zoom manager allows.
pub const MIN_SCALE: f64 = 0.01;

/// Largest scale the zoom manager allows.
pub const MAX_SCALE: f64 = 1000.0;

/// Multiplicative step for a single zoom-in / zoom-out.
pub const ZOOM_STEP: f64 = 1.1;

/// Maximum number of transforms kept for undo.
pub const ZOOM_HISTORY_LIMIT: usize = 50;

/// Default screen padding around fitted content, in pixels.
pub const FIT_PADDING_PX: f64 = 20.0;
