use crate::coords::Rect;
use crate::node::ImageId;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Image blit payload: the whole image scaled into `dest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageId,
    pub dest: Rect,
}

impl DrawList {
    /// Records an image blit.
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, image: ImageId, dest: Rect) {
        self.push(z, DrawCmd::Image(ImageCmd { image, dest }));
    }
}
