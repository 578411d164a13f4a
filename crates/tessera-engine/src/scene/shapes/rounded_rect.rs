use crate::coords::{CornerRadii, Rect};
use crate::paint::Brush;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub brush: Brush,
}

impl DrawList {
    /// Records a rounded rectangle fill.
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, brush: Brush) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, brush }));
    }
}
