use crate::coords::{CornerRadii, Rect, Vec2};
use crate::node::{Geometry, ImageId};
use crate::paint::Brush;
use crate::scene::{DrawList, ZIndex};

/// Platform drawing surface driven by the paint walk.
///
/// All coordinates are canvas coordinates; brushes are already resolved. Clip
/// scopes nest and are always balanced by the walk while the surface is available.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);

    fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, brush: &Brush);

    fn fill_circle(&mut self, center: Vec2, radius: f32, brush: &Brush);

    /// Draws the whole image scaled into `dest`.
    fn draw_image(&mut self, image: ImageId, dest: Rect);

    /// Restricts subsequent drawing to `rect` (intersected with any open clip).
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    fn fill_geometry(&mut self, geometry: &Geometry, brush: &Brush) {
        match *geometry {
            Geometry::Rect(rect) => self.fill_rect(rect, brush),
            Geometry::RoundedRect { rect, radii } => self.fill_rounded_rect(rect, radii, brush),
            Geometry::Circle { center, radius } => self.fill_circle(center, radius, brush),
        }
    }
}

/// Records into a single layer; insertion order is paint order.
impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.push_rect(ZIndex::default(), rect, brush.clone());
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, brush: &Brush) {
        self.push_rounded_rect(ZIndex::default(), rect, radii, brush.clone());
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, brush: &Brush) {
        self.push_circle(ZIndex::default(), center, radius, brush.clone());
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect) {
        self.push_image(ZIndex::default(), image, dest);
    }

    fn push_clip(&mut self, rect: Rect) {
        DrawList::push_clip(self, rect);
    }

    fn pop_clip(&mut self) {
        DrawList::pop_clip(self);
    }
}
