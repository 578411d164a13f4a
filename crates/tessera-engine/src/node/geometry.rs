use crate::coords::{CornerRadii, Rect, Transform, Vec2};

/// Outline of a paintable shape, in the shape's local coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    Rect(Rect),
    RoundedRect { rect: Rect, radii: CornerRadii },
    Circle { center: Vec2, radius: f32 },
}

impl Geometry {
    /// Axis-aligned bounding box; this is the region a fill is resolved against.
    pub fn bounds(&self) -> Rect {
        match *self {
            Geometry::Rect(rect) => rect.normalized(),
            Geometry::RoundedRect { rect, .. } => rect.normalized(),
            Geometry::Circle { center, radius } => {
                let r = radius.abs();
                Rect::new(center.x - r, center.y - r, 2.0 * r, 2.0 * r)
            }
        }
    }

    /// The same outline mapped into another coordinate space.
    pub fn transformed(&self, t: Transform) -> Geometry {
        match *self {
            Geometry::Rect(rect) => Geometry::Rect(t.apply_rect(rect)),
            Geometry::RoundedRect { rect, radii } => Geometry::RoundedRect {
                rect: t.apply_rect(rect),
                radii: CornerRadii::new(
                    t.apply_length(radii.top_left),
                    t.apply_length(radii.top_right),
                    t.apply_length(radii.bottom_right),
                    t.apply_length(radii.bottom_left),
                ),
            },
            Geometry::Circle { center, radius } => Geometry::Circle {
                center: t.apply_point(center),
                radius: t.apply_length(radius),
            },
        }
    }
}
