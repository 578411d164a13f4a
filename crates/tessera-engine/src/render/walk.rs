use crate::align::AspectMode;
use crate::coords::{Rect, Transform};
use crate::node::{ImageNode, Node, NodeKind, Shape, ViewportNode};
use crate::paint::Pattern;

use super::{Canvas, RenderContext};

/// What a paint walk did.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PaintStats {
    /// Fill and image operations issued to the surface.
    pub draw_calls: usize,
    /// Draw operations dropped because the surface was unavailable. The walk keeps
    /// visiting the tree after a halt so every abandoned draw is counted.
    pub skipped_draws: usize,
    /// Pattern tiles whose content was painted.
    pub pattern_tiles: usize,
    /// Pattern fills skipped for exceeding the configured limits.
    pub skipped_patterns: usize,
    /// The walk stopped early because the surface went away.
    pub halted: bool,
}

impl<'s> RenderContext<'s> {
    /// Paints `root` into the current surface.
    ///
    /// Outside a pass, or once the view is gone, nothing is drawn and the returned
    /// stats have `halted` set. Losing the view mid-walk stops further drawing
    /// without reporting an error.
    pub fn paint(&mut self, root: &Node) -> PaintStats {
        let halted = self.current_surface().is_none();
        if halted {
            log::debug!("no surface available; nothing will be drawn");
        }

        let stats = PaintStats { halted, ..PaintStats::default() };
        let mut walk = Walk { ctx: self, stats, pattern_depth: 0 };
        walk.node(root, Transform::IDENTITY);

        log::trace!("paint walk finished: {:?}", walk.stats);
        walk.stats
    }
}

struct Walk<'c, 's> {
    ctx: &'c mut RenderContext<'s>,
    stats: PaintStats,
    pattern_depth: usize,
}

impl Walk<'_, '_> {
    /// Runs `op` against the surface if one is available, otherwise halts the walk.
    fn with_canvas(&mut self, op: impl FnOnce(&mut dyn Canvas)) -> bool {
        if self.stats.halted {
            return false;
        }
        match self.ctx.current_surface() {
            Some(canvas) => {
                op(canvas);
                true
            }
            None => {
                log::debug!("surface became unavailable; halting paint walk");
                self.stats.halted = true;
                false
            }
        }
    }

    fn draw(&mut self, op: impl FnOnce(&mut dyn Canvas)) {
        if self.with_canvas(op) {
            self.stats.draw_calls += 1;
        } else {
            self.stats.skipped_draws += 1;
        }
    }

    fn node(&mut self, node: &Node, parent: Transform) {
        let t = parent.pre_translate(node.offset);
        match &node.kind {
            NodeKind::Group(children) => {
                for child in children {
                    self.node(child, t);
                }
            }
            NodeKind::Shape(shape) => self.shape(shape, t),
            NodeKind::Image(image) => self.image(image, t),
            NodeKind::Viewport(vp) => self.viewport(vp, t),
        }
    }

    fn shape(&mut self, shape: &Shape, t: Transform) {
        let Some(fill) = &shape.fill else {
            return;
        };

        if let Some(brush) = fill.brush() {
            let geometry = shape.geometry.transformed(t);
            let brush = brush.transformed(t);
            self.draw(|canvas| canvas.fill_geometry(&geometry, &brush));
        } else if let Some(pattern) = fill.as_pattern() {
            // Scissor clipping only: non-rectangular outlines get their bounding box tiled.
            self.pattern(pattern, shape.geometry.bounds(), t);
        }
    }

    /// Tiles `pattern` over `region` (local coordinates), painting its content
    /// once per tile through the regular walk.
    fn pattern(&mut self, pattern: &Pattern, region: Rect, t: Transform) {
        let tiles = pattern.tiles(region);
        let count = tiles.tile_count();
        if count == 0 {
            log::trace!("pattern over {region:?} has no tiles");
            return;
        }

        let config = self.ctx.config();
        if count > config.max_pattern_tiles {
            log::warn!(
                "pattern fill needs {count} tiles (limit {}); skipping",
                config.max_pattern_tiles
            );
            self.stats.skipped_patterns += 1;
            return;
        }
        if self.pattern_depth >= config.max_pattern_depth {
            log::warn!("pattern nesting exceeds {} levels; skipping", config.max_pattern_depth);
            self.stats.skipped_patterns += 1;
            return;
        }

        self.pattern_depth += 1;
        for tile in tiles {
            let clip = t.apply_rect(tile.clip);
            let clipped = self.with_canvas(|canvas| canvas.push_clip(clip));
            if clipped {
                self.stats.pattern_tiles += 1;
            }

            // After a halt the content is still walked, only to count its draws.
            self.node(pattern.content(), t.pre_translate(tile.origin));

            if clipped {
                self.with_canvas(|canvas| canvas.pop_clip());
            }
        }
        self.pattern_depth -= 1;
    }

    fn image(&mut self, image: &ImageNode, t: Transform) {
        let Some(placed) = image.placed_rect() else {
            return;
        };

        let dest = t.apply_rect(placed);
        let id = image.image;
        if image.placement.mode == AspectMode::Slice {
            let frame = t.apply_rect(image.frame);
            let clipped = self.with_canvas(|canvas| canvas.push_clip(frame));
            self.draw(|canvas| canvas.draw_image(id, dest));
            if clipped {
                self.with_canvas(|canvas| canvas.pop_clip());
            }
        } else {
            self.draw(|canvas| canvas.draw_image(id, dest));
        }
    }

    fn viewport(&mut self, vp: &ViewportNode, t: Transform) {
        let Some(fit) = vp.placement.fit(vp.frame, vp.view_box) else {
            return;
        };

        let frame = t.apply_rect(vp.frame);
        let clipped = self.with_canvas(|canvas| canvas.push_clip(frame));
        self.node(&vp.content, fit.then(t));
        if clipped {
            self.with_canvas(|canvas| canvas.pop_clip());
        }
    }
}
