use crate::coords::Rect;
use crate::paint::{Brush, Color};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub brush: Brush,
}

impl DrawList {
    /// Records a rectangle fill.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, brush: Brush) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, brush }));
    }

    /// Records a solid rectangle fill.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Brush::Solid(color));
    }
}
