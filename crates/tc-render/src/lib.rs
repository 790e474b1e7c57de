//! `tc-render` — the SVG network map.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`svg`]       | `Document`, `Circle`, `Polyline`, `Text`, `Color`     |
//! | [`projector`] | `SphereProjector` (geo → canvas)                      |
//! | [`renderer`]  | `MapRenderer`, `RenderSettings`                       |
//! | [`error`]     | `RenderError`, `RenderResult<T>`                      |
//!
//! # Draw order
//!
//! The document is emitted in four strict layers — route polylines, bus-name
//! labels, stop circles, stop-name labels — which is what gives the map its
//! z-ordering: lines under everything, stop names on top.

pub mod error;
pub mod projector;
pub mod renderer;
pub mod svg;


pub use error::{RenderError, RenderResult};
pub use projector::SphereProjector;
pub use renderer::{MapRenderer, RenderSettings};
pub use svg::{Circle, Color, Document, LineCap, LineJoin, Point, Polyline, Shape, Text};
