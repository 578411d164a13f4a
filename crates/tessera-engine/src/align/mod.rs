//! Single-axis alignment and placement of intrinsically sized content.
//!
//! [`Align`] is the primitive: given an outer extent and an inner extent it returns
//! the offset of the inner content along one axis. [`Placement`] combines two of
//! them with a scaling mode to fit content (images, nested viewports) into a frame.

mod error;
mod placement;
mod strategy;

pub use error::ParseAlignError;
pub use placement::{AspectMode, Placement};
pub use strategy::Align;
