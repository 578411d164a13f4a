//! Tessera engine crate.
//!
//! Alignment, fill resolution and pattern tiling for a vector scene renderer,
//! plus the render context that connects a paint pass to a drawing surface.

pub mod align;
pub mod coords;
pub mod logging;
pub mod node;
pub mod paint;
pub mod render;
pub mod scene;
