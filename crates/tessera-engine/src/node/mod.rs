//! Drawable scene tree consumed by the paint walk.
//!
//! Trees are built by document loaders outside this crate. Each node carries an
//! `offset` that translates its local coordinates into its parent's space.

mod content;
mod geometry;

use core::slice;

use crate::align::Placement;
use crate::coords::{Rect, Vec2};
use crate::paint::Paint;

pub use content::{ImageId, ImageNode, ViewportNode};
pub use geometry::Geometry;

/// A filled outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    /// `None` leaves the interior unpainted.
    pub fill: Option<Paint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group(Vec<Node>),
    Shape(Shape),
    Image(ImageNode),
    Viewport(ViewportNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub offset: Vec2,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, offset: Vec2::zero() }
    }

    pub fn group(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Group(children))
    }

    pub fn shape(geometry: Geometry, fill: impl Into<Paint>) -> Self {
        Self::new(NodeKind::Shape(Shape { geometry, fill: Some(fill.into()) }))
    }

    pub fn image(image: ImageId, intrinsic: Vec2, frame: Rect, placement: Placement) -> Self {
        Self::new(NodeKind::Image(ImageNode { image, intrinsic, frame, placement }))
    }

    pub fn viewport(frame: Rect, view_box: Rect, placement: Placement, content: Node) -> Self {
        Self::new(NodeKind::Viewport(ViewportNode {
            frame,
            view_box,
            placement,
            content: Box::new(content),
        }))
    }

    /// Moves this node by `offset` within its parent.
    #[inline]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Direct children; a viewport's content counts as its only child.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group(children) => children,
            NodeKind::Viewport(vp) => slice::from_ref(&*vp.content),
            NodeKind::Shape(_) | NodeKind::Image(_) => &[],
        }
    }

    /// Bounding box in local coordinates (before `offset`), if the node covers any area.
    pub fn local_bounds(&self) -> Option<Rect> {
        let bounds = match &self.kind {
            NodeKind::Group(children) => children.iter().filter_map(Node::bounds).reduce(Rect::union),
            NodeKind::Shape(shape) => Some(shape.geometry.bounds()),
            NodeKind::Image(image) => image.placed_rect(),
            NodeKind::Viewport(vp) => Some(vp.frame.normalized()),
        };
        bounds.filter(|r| !r.is_empty())
    }

    /// Bounding box in the parent's coordinates.
    pub fn bounds(&self) -> Option<Rect> {
        self.local_bounds().map(|r| r.translate(self.offset))
    }

    /// Natural size of the node's content.
    ///
    /// Images report their pixel size regardless of frame; everything else
    /// reports the extent of its bounds.
    pub fn intrinsic_size(&self) -> Vec2 {
        match &self.kind {
            NodeKind::Image(image) => image.intrinsic,
            _ => self.local_bounds().map(|r| r.size).unwrap_or_default(),
        }
    }
}
