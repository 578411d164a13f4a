use crate::coords::Vec2;
use crate::paint::Brush;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub brush: Brush,
}

impl DrawList {
    /// Records a circle fill.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, brush: Brush) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, brush }));
    }
}
