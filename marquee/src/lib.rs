//! Marquee selection geometry for the DXF viewer canvas.
//!
//! This crate answers one question: given a rubber-band drag on the canvas,
//! which drawing entities, overlay regions, and color layers does it select?
//! It owns the screen/world coordinate conversions, the bounds and polygon
//! math behind hit-testing, the window-vs-crossing policy, and the zoom state
//! that the host uses to keep its view transform in sync. Everything here is
//! synchronous and side-effect free apart from `tracing` events; the host
//! decides what to do with a [`universal::SelectionResult`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`universal`] | Top-level [`universal::MarqueeSelector`] and result shaping |
//! | [`pick`] | Per-kind selectors for entities, overlays, and color layers |
//! | [`mode`] | Window vs crossing classification |
//! | [`geom`] | Segment, polygon, and rectangle intersection primitives |
//! | [`bounds`] | Axis-aligned bounding boxes |
//! | [`transform`] | View transform and screen/world conversions |
//! | [`entity`] | Selectable item types |
//! | [`scene`] | JSON scene model and loader |
//! | [`zoom`] | Zoom manager with undo history |
//! | [`config`] | Selector configuration from the environment |
//! | [`consts`] | Shared numeric constants (tolerances, zoom limits, etc.) |

pub mod bounds;
pub mod config;
pub mod consts;
pub mod entity;
pub mod geom;
pub mod mode;
pub mod pick;
pub mod scene;
pub mod transform;
pub mod universal;
pub mod zoom;
