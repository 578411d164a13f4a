/// Per-corner radii of a rounded rectangle, clockwise from top-left.
///
/// Negative radii are treated as zero by canvases.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    #[inline]
    pub const fn all(r: f32) -> Self {
        Self::new(r, r, r, r)
    }
}
