use core::str::FromStr;

use crate::coords::{Rect, Transform, Vec2};

use super::{Align, ParseAlignError};

/// How content is scaled before it is aligned inside a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum AspectMode {
    /// Stretch each axis independently to fill the frame; alignment is irrelevant.
    None,
    /// Uniform scale so the whole content fits (may leave slack on one axis).
    #[default]
    Meet,
    /// Uniform scale so the content covers the frame (may overflow on one axis).
    Slice,
}

/// Fits intrinsically sized content into a frame: uniform (or free) scaling
/// followed by per-axis [`Align`]ment of the scaled content.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub x: Align,
    pub y: Align,
    pub mode: AspectMode,
}

impl Default for Placement {
    /// `xMidYMid meet`.
    fn default() -> Self {
        Self { x: Align::MID, y: Align::MID, mode: AspectMode::Meet }
    }
}

impl Placement {
    #[inline]
    pub const fn new(x: Align, y: Align, mode: AspectMode) -> Self {
        Self { x, y, mode }
    }

    /// Stretch to the frame, ignoring aspect ratio.
    #[inline]
    pub const fn stretch() -> Self {
        Self { x: Align::MID, y: Align::MID, mode: AspectMode::None }
    }

    /// Scale of the content along each axis once placed in `frame`.
    fn scale_for(self, frame: Rect, content: Vec2) -> Vec2 {
        let sx = frame.size.x / content.x;
        let sy = frame.size.y / content.y;
        match self.mode {
            AspectMode::None => Vec2::new(sx, sy),
            AspectMode::Meet => Vec2::splat(sx.min(sy)),
            AspectMode::Slice => Vec2::splat(sx.max(sy)),
        }
    }

    /// Rectangle occupied by content of intrinsic size `content` placed in `frame`.
    ///
    /// Returns `None` when the content has no area or the result is not finite;
    /// such content is simply not drawn.
    pub fn place(self, frame: Rect, content: Vec2) -> Option<Rect> {
        if !(content.x > 0.0 && content.y > 0.0) || !frame.is_finite() || !content.is_finite() {
            return None;
        }

        let size = content.mul_elem(self.scale_for(frame, content));
        let origin = Vec2::new(
            frame.origin.x + self.x.align(frame.size.x, size.x),
            frame.origin.y + self.y.align(frame.size.y, size.y),
        );

        let placed = Rect::from_origin_size(origin, size);
        placed.is_finite().then_some(placed)
    }

    /// Transform mapping `view_box` coordinates onto their placement in `frame`.
    pub fn fit(self, frame: Rect, view_box: Rect) -> Option<Transform> {
        let placed = self.place(frame, view_box.size)?;
        let scale = Vec2::new(placed.size.x / view_box.size.x, placed.size.y / view_box.size.y);
        let translate = placed.origin - view_box.origin.mul_elem(scale);
        Some(Transform { scale, translate })
    }
}

impl FromStr for Placement {
    type Err = ParseAlignError;

    /// Parses `preserveAspectRatio`-style values: `none`, `xMidYMin`, `xMaxYMax slice`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let align = parts.next().ok_or_else(|| ParseAlignError::new("empty placement"))?;

        let mode = match parts.next() {
            None | Some("meet") => AspectMode::Meet,
            Some("slice") => AspectMode::Slice,
            Some(other) => {
                return Err(ParseAlignError::new(format!("unknown scaling mode '{other}'")));
            }
        };

        if let Some(extra) = parts.next() {
            return Err(ParseAlignError::new(format!("unexpected trailing token '{extra}'")));
        }

        if align == "none" {
            return Ok(Placement::stretch());
        }

        // `xMidYMax` splits into the axis keywords `xMid` and `yMax`.
        let (x, y) = match (align.get(..4), align.get(4..)) {
            (Some(x), Some(y)) if x.starts_with('x') && y.starts_with('Y') => (x, &y[1..]),
            _ => return Err(ParseAlignError::new(format!("malformed alignment '{align}'"))),
        };

        Ok(Placement::new(x.parse()?, format!("y{y}").parse()?, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── place ─────────────────────────────────────────────────────────────

    #[test]
    fn meet_centers_wide_content_vertically() {
        let placed = Placement::default().place(r(0.0, 0.0, 100.0, 100.0), Vec2::new(200.0, 100.0));
        assert_eq!(placed, Some(r(0.0, 25.0, 100.0, 50.0)));
    }

    #[test]
    fn meet_respects_frame_origin_and_end_alignment() {
        let p = Placement::new(Align::MAX, Align::MIN, AspectMode::Meet);
        let placed = p.place(r(10.0, 10.0, 100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(placed, Some(r(10.0, 10.0, 100.0, 50.0)));

        let placed = p.place(r(10.0, 10.0, 100.0, 50.0), Vec2::new(10.0, 10.0));
        assert_eq!(placed, Some(r(60.0, 10.0, 50.0, 50.0)));
    }

    #[test]
    fn slice_covers_frame_and_overflows() {
        let p = Placement::new(Align::MID, Align::MID, AspectMode::Slice);
        let placed = p.place(r(0.0, 0.0, 100.0, 100.0), Vec2::new(200.0, 100.0));
        assert_eq!(placed, Some(r(-50.0, 0.0, 200.0, 100.0)));
    }

    #[test]
    fn none_stretches_each_axis() {
        let placed = Placement::stretch().place(r(0.0, 0.0, 30.0, 60.0), Vec2::new(10.0, 10.0));
        assert_eq!(placed, Some(r(0.0, 0.0, 30.0, 60.0)));
    }

    #[test]
    fn zero_sized_content_is_not_placed() {
        assert_eq!(Placement::default().place(r(0.0, 0.0, 10.0, 10.0), Vec2::new(0.0, 5.0)), None);
        assert_eq!(Placement::default().place(r(0.0, 0.0, 10.0, 10.0), Vec2::new(5.0, -1.0)), None);
    }

    // ── fit ───────────────────────────────────────────────────────────────

    #[test]
    fn fit_maps_view_box_corners_onto_placement() {
        let t = Placement::default()
            .fit(r(0.0, 0.0, 100.0, 50.0), r(10.0, 10.0, 20.0, 20.0))
            .unwrap();
        assert_eq!(t * Vec2::new(10.0, 10.0), Vec2::new(25.0, 0.0));
        assert_eq!(t * Vec2::new(30.0, 30.0), Vec2::new(75.0, 50.0));
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_align_and_mode() {
        let p: Placement = "xMaxYMin slice".parse().unwrap();
        assert_eq!(p, Placement::new(Align::MAX, Align::MIN, AspectMode::Slice));

        let p: Placement = "xMinYMid".parse().unwrap();
        assert_eq!(p, Placement::new(Align::MIN, Align::MID, AspectMode::Meet));
    }

    #[test]
    fn parses_none() {
        let p: Placement = "none".parse().unwrap();
        assert_eq!(p.mode, AspectMode::None);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!("".parse::<Placement>().is_err());
        assert!("xMid".parse::<Placement>().is_err());
        assert!("yMidxMid".parse::<Placement>().is_err());
        assert!("xMidYMid stretch".parse::<Placement>().is_err());
        assert!("xMidYMid meet extra".parse::<Placement>().is_err());
        assert!("xMidYMé".parse::<Placement>().is_err());
    }
}
