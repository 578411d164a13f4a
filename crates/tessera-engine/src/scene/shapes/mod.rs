pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod rect;
pub(crate) mod rounded_rect;

pub use circle::CircleCmd;
pub use image::ImageCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
