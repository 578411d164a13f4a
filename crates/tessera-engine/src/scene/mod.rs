//! Recorded draw stream.
//!
//! [`DrawList`] is the crate's own [`Canvas`](crate::render::Canvas): it records
//! resolved draw commands with their scissor rects so a backend (or a test) can
//! replay or inspect them.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
