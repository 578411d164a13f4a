use core::ops::Mul;

use super::{Rect, Vec2};

/// Axis-aligned affine map: `p' = p * scale + translate` (component-wise).
///
/// Nodes only ever translate (offsets, pattern tiles) or scale uniformly per axis
/// (nested viewports), so rotation and skew are not representable. This keeps every
/// mapped rectangle axis-aligned and lets clip rects stay plain scissor rects.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub scale: Vec2,
    pub translate: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self { scale: Vec2::new(1.0, 1.0), translate: Vec2::new(0.0, 0.0) };

    #[inline]
    pub const fn translate(delta: Vec2) -> Self {
        Self { scale: Vec2::new(1.0, 1.0), translate: delta }
    }

    #[inline]
    pub const fn scale(scale: Vec2) -> Self {
        Self { scale, translate: Vec2::new(0.0, 0.0) }
    }

    /// Returns the map that applies `self` first, then `outer`.
    #[inline]
    pub fn then(self, outer: Transform) -> Self {
        Self {
            scale: self.scale.mul_elem(outer.scale),
            translate: self.translate.mul_elem(outer.scale) + outer.translate,
        }
    }

    /// Returns the map that first moves points by `delta`, then applies `self`.
    ///
    /// This is how child coordinate spaces are entered during the paint walk.
    #[inline]
    pub fn pre_translate(self, delta: Vec2) -> Self {
        Transform::translate(delta).then(self)
    }

    #[inline]
    pub fn apply_point(self, p: Vec2) -> Vec2 {
        p.mul_elem(self.scale) + self.translate
    }

    /// Maps a rectangle; the result is normalized so mirrored axes keep a positive size.
    #[inline]
    pub fn apply_rect(self, rect: Rect) -> Rect {
        Rect::from_origin_size(self.apply_point(rect.origin), rect.size.mul_elem(self.scale))
            .normalized()
    }

    /// Maps a scalar length (e.g. a radius).
    ///
    /// Non-uniform scales have no exact answer; the geometric mean is used.
    #[inline]
    pub fn apply_length(self, len: f32) -> f32 {
        len * (self.scale.x * self.scale.y).abs().sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.scale.is_finite() && self.translate.is_finite()
    }
}

impl Mul<Vec2> for Transform {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply_point(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.5, -2.0);
        assert_eq!(Transform::IDENTITY * p, p);
    }

    #[test]
    fn then_applies_inner_first() {
        let t = Transform::scale(Vec2::new(2.0, 3.0)).then(Transform::translate(Vec2::new(10.0, 20.0)));
        assert_eq!(t * Vec2::new(1.0, 1.0), Vec2::new(12.0, 23.0));
    }

    #[test]
    fn pre_translate_moves_before_scaling() {
        let t = Transform::scale(Vec2::splat(2.0)).pre_translate(Vec2::new(5.0, 0.0));
        assert_eq!(t * Vec2::zero(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn apply_rect_normalizes_mirrored_axes() {
        let t = Transform::scale(Vec2::new(-1.0, 1.0));
        let r = t.apply_rect(Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(r, Rect::new(-10.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn apply_length_uses_geometric_mean() {
        let t = Transform::scale(Vec2::new(2.0, 8.0));
        assert_eq!(t.apply_length(1.0), 4.0);
    }
}
