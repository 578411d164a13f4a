use crate::align::Placement;
use crate::coords::{Rect, Vec2};

use super::Node;

/// Opaque handle to image pixels owned by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub u32);

/// Raster content with an intrinsic size, placed inside `frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub image: ImageId,
    /// Natural size of the image in logical pixels.
    pub intrinsic: Vec2,
    pub frame: Rect,
    pub placement: Placement,
}

impl ImageNode {
    /// Where the image lands inside its frame, or `None` if it has no area.
    #[inline]
    pub fn placed_rect(&self) -> Option<Rect> {
        self.placement.place(self.frame, self.intrinsic)
    }
}

/// Nested coordinate system: `content` is drawn in `view_box` units and mapped
/// into `frame`. Content overflowing the frame is clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportNode {
    pub frame: Rect,
    pub view_box: Rect,
    pub placement: Placement,
    pub content: Box<Node>,
}
