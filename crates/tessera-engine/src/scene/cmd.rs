use crate::scene::shapes::{CircleCmd, ImageCmd, RectCmd, RoundedRectCmd};

/// Canvas-agnostic draw command.
///
/// Every command is already in canvas coordinates and carries a resolved
/// [`Brush`](crate::paint::Brush); patterns have been expanded by the paint walk.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Image(ImageCmd),
}
