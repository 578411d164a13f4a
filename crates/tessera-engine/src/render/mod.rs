//! Render context and node paint walk.
//!
//! A [`RenderContext`] binds one pass to a [`Canvas`]. The walk in
//! [`RenderContext::paint`] resolves fills (expanding patterns into tiles), places
//! intrinsically sized content and checks surface availability before every draw.
//!
//! Convention: canvas coordinates are logical pixels, top-left origin, +Y down.

mod canvas;
mod config;
mod ctx;
mod error;
mod walk;

pub use canvas::Canvas;
pub use config::RenderConfig;
pub use ctx::{PassState, RenderContext, View};
pub use error::RenderError;
pub use walk::PaintStats;
