//! Fills applied when a shape is painted.
//!
//! - [`Paint`] is what a node asks for: solid, gradient or [`Pattern`].
//! - [`Brush`] is what a canvas can draw directly. Patterns never reach a canvas;
//!   the paint walk expands them into tiles of their content first.
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod pattern;

use std::sync::Arc;

use crate::coords::Transform;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use pattern::{Pattern, Tile, Tiles};

/// Fill a canvas can paint without further resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Brush {
    /// Maps any positional data of the brush into canvas space.
    pub fn transformed(&self, transform: Transform) -> Brush {
        match self {
            Brush::Solid(c) => Brush::Solid(*c),
            Brush::LinearGradient(g) => Brush::LinearGradient(g.transformed(transform)),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Fill for a node's interior.
///
/// Patterns are held behind `Arc` so any number of shapes can reference one
/// definition. All variants are immutable once built and safe to read from
/// concurrent paint passes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    Pattern(Arc<Pattern>),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn pattern(pattern: Pattern) -> Self {
        Paint::Pattern(Arc::new(pattern))
    }

    /// The directly paintable form of this fill, or `None` for patterns.
    pub fn brush(&self) -> Option<Brush> {
        match self {
            Paint::Solid(c) => Some(Brush::Solid(*c)),
            Paint::LinearGradient(g) => Some(Brush::LinearGradient(g.clone())),
            Paint::Pattern(_) => None,
        }
    }

    #[inline]
    pub fn as_pattern(&self) -> Option<&Arc<Pattern>> {
        match self {
            Paint::Pattern(p) => Some(p),
            _ => None,
        }
    }

    /// Conservative: patterns may leave gaps between their content, so they never count as opaque.
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            Paint::LinearGradient(g) => g.is_opaque(),
            Paint::Pattern(_) => false,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Pattern> for Paint {
    fn from(pattern: Pattern) -> Self {
        Paint::pattern(pattern)
    }
}

impl From<Arc<Pattern>> for Paint {
    fn from(pattern: Arc<Pattern>) -> Self {
        Paint::Pattern(pattern)
    }
}
