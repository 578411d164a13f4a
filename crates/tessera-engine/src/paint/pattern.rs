use crate::coords::{Rect, Vec2};
use crate::node::Node;

/// Fill that paints by repeating a node subtree across the filled region.
///
/// The pattern exclusively owns its `content`; shapes share the pattern itself
/// through `Arc<Pattern>` (see [`Paint::Pattern`](super::Paint::Pattern)). Nothing in
/// the content points back at the pattern or at the shapes using it.
///
/// `bounds` describes one cell of the repetition:
/// - `user_space == true`: absolute coordinates in the filled shape's space.
/// - `user_space == false`: fractions of the filled region (`0.0..=1.0` spans it).
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    content: Node,
    bounds: Rect,
    user_space: bool,
}

impl Pattern {
    /// Creates a pattern. A negative cell width or height is clamped to zero,
    /// which makes the pattern paint nothing.
    pub fn new(content: Node, bounds: Rect, user_space: bool) -> Self {
        let mut bounds = bounds;
        if bounds.size.x < 0.0 || bounds.size.y < 0.0 {
            log::warn!(
                "pattern bounds have negative size {}x{}; clamping to zero",
                bounds.size.x,
                bounds.size.y
            );
            bounds.size = Vec2::new(bounds.size.x.max(0.0), bounds.size.y.max(0.0));
        }

        Self { content, bounds, user_space }
    }

    /// Pattern whose cell is given in absolute coordinates.
    #[inline]
    pub fn user_space(content: Node, bounds: Rect) -> Self {
        Self::new(content, bounds, true)
    }

    /// Pattern whose cell is given as fractions of the filled region.
    #[inline]
    pub fn object_bounding_box(content: Node, bounds: Rect) -> Self {
        Self::new(content, bounds, false)
    }

    #[inline]
    pub fn content(&self) -> &Node {
        &self.content
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn is_user_space(&self) -> bool {
        self.user_space
    }

    /// The pattern cell in the coordinate space of `target`.
    ///
    /// Returns `None` for a cell without area, which means "nothing to tile".
    pub fn cell_rect(&self, target: Rect) -> Option<Rect> {
        let cell = if self.user_space {
            self.bounds
        } else {
            Rect::from_origin_size(
                target.origin + self.bounds.origin.mul_elem(target.size),
                self.bounds.size.mul_elem(target.size),
            )
        };

        (cell.is_finite() && !cell.is_empty()).then_some(cell)
    }

    /// Tile positions covering `target`, anchored on the cell origin.
    pub fn tiles(&self, target: Rect) -> Tiles {
        match self.cell_rect(target) {
            Some(cell) if target.is_finite() && !target.is_empty() => Tiles::new(cell, target),
            _ => Tiles::empty(),
        }
    }
}

/// One repetition of a pattern: where its content origin goes and the part of the
/// target it may paint into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tile {
    pub origin: Vec2,
    pub clip: Rect,
}

/// Row-major iterator over the tiles of a pattern fill.
///
/// The cell grid is anchored on the cell origin and extended in both directions
/// until it covers the target. Each yielded clip is the tile cell intersected with
/// the target, so boundary tiles are clipped rather than dropped and nothing is
/// painted outside the target.
#[derive(Debug, Clone)]
pub struct Tiles {
    cell: Rect,
    target: Rect,
    col_start: i64,
    col_end: i64,
    row_end: i64,
    col: i64,
    row: i64,
}

impl Tiles {
    fn new(cell: Rect, target: Rect) -> Self {
        // f64 keeps the grid exact when the anchor is far from the target.
        let span = |from: f32, to: f32, anchor: f32, step: f32| {
            let (anchor, step) = (f64::from(anchor), f64::from(step));
            let first = ((f64::from(from) - anchor) / step).floor() as i64;
            let last = ((f64::from(to) - anchor) / step).ceil() as i64;
            (first, last.max(first))
        };

        let max = target.max();
        let (col_start, col_end) = span(target.origin.x, max.x, cell.origin.x, cell.size.x);
        let (row_start, row_end) = span(target.origin.y, max.y, cell.origin.y, cell.size.y);

        Self { cell, target, col_start, col_end, row_end, col: col_start, row: row_start }
    }

    fn empty() -> Self {
        Self {
            cell: Rect::default(),
            target: Rect::default(),
            col_start: 0,
            col_end: 0,
            row_end: 0,
            col: 0,
            row: 0,
        }
    }

    /// Number of grid cells still to visit. Saturates instead of overflowing.
    pub fn tile_count(&self) -> u64 {
        if self.col_start >= self.col_end || self.row >= self.row_end {
            return 0;
        }
        let cols = self.col_end.abs_diff(self.col_start);
        let rows = self.row_end.abs_diff(self.row);
        let consumed = self.col.abs_diff(self.col_start);
        cols.saturating_mul(rows).saturating_sub(consumed)
    }
}

impl Iterator for Tiles {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        while self.row < self.row_end && self.col_start < self.col_end {
            let step = |anchor: f32, index: i64, size: f32| {
                (f64::from(anchor) + index as f64 * f64::from(size)) as f32
            };
            let origin = Vec2::new(
                step(self.cell.origin.x, self.col, self.cell.size.x),
                step(self.cell.origin.y, self.row, self.cell.size.y),
            );

            self.col += 1;
            if self.col >= self.col_end {
                self.col = self.col_start;
                self.row += 1;
            }

            // Float rounding can leave a sliver row/column with no overlap.
            if let Some(clip) = Rect::from_origin_size(origin, self.cell.size).intersect(self.target) {
                return Some(Tile { origin, clip });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.tile_count()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Geometry, Node};
    use crate::paint::{Color, Paint};

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    fn dot() -> Node {
        Node::shape(Geometry::Circle { center: Vec2::new(5.0, 5.0), radius: 2.0 }, Paint::Solid(Color::BLACK))
    }

    fn area(tiles: &[Tile]) -> f32 {
        tiles.iter().map(|t| t.clip.size.x * t.clip.size.y).sum()
    }

    // ── cell_rect ─────────────────────────────────────────────────────────

    #[test]
    fn user_space_cell_ignores_target() {
        let p = Pattern::user_space(dot(), r(3.0, 4.0, 10.0, 10.0));
        assert_eq!(p.cell_rect(r(0.0, 0.0, 25.0, 10.0)), Some(r(3.0, 4.0, 10.0, 10.0)));
        assert_eq!(p.cell_rect(r(50.0, 50.0, 500.0, 1.0)), Some(r(3.0, 4.0, 10.0, 10.0)));
    }

    #[test]
    fn bounding_box_cell_scales_against_target() {
        let p = Pattern::object_bounding_box(dot(), r(0.1, 0.5, 0.25, 0.5));
        assert_eq!(p.cell_rect(r(10.0, 20.0, 200.0, 40.0)), Some(r(30.0, 40.0, 50.0, 20.0)));
    }

    #[test]
    fn zero_area_cell_is_none() {
        assert_eq!(Pattern::user_space(dot(), r(0.0, 0.0, 0.0, 10.0)).cell_rect(r(0.0, 0.0, 9.0, 9.0)), None);
        assert_eq!(Pattern::user_space(dot(), r(0.0, 0.0, 10.0, 0.0)).cell_rect(r(0.0, 0.0, 9.0, 9.0)), None);
    }

    #[test]
    fn negative_bounds_are_clamped() {
        let p = Pattern::user_space(dot(), r(0.0, 0.0, -5.0, 10.0));
        assert_eq!(p.bounds().size, Vec2::new(0.0, 10.0));
        assert_eq!(p.tiles(r(0.0, 0.0, 100.0, 100.0)).count(), 0);
    }

    // ── tiles ─────────────────────────────────────────────────────────────

    #[test]
    fn three_tiles_with_clipped_tail() {
        let p = Pattern::user_space(dot(), r(0.0, 0.0, 10.0, 10.0));
        let tiles: Vec<Tile> = p.tiles(r(0.0, 0.0, 25.0, 10.0)).collect();

        assert_eq!(tiles.len(), 3);
        let xs: Vec<f32> = tiles.iter().map(|t| t.origin.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0]);
        assert_eq!(tiles[0].clip, r(0.0, 0.0, 10.0, 10.0));
        assert_eq!(tiles[1].clip, r(10.0, 0.0, 10.0, 10.0));
        assert_eq!(tiles[2].clip, r(20.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn tiles_cover_target_exactly() {
        let target = r(3.0, -7.0, 47.0, 31.0);
        let p = Pattern::user_space(dot(), r(5.0, 2.0, 8.0, 6.0));
        let tiles: Vec<Tile> = p.tiles(target).collect();

        for t in &tiles {
            assert_eq!(t.clip.intersect(target), Some(t.clip), "tile leaks outside target");
        }
        assert!((area(&tiles) - 47.0 * 31.0).abs() < 1e-3);
    }

    #[test]
    fn distant_anchor_still_covers_target() {
        let p = Pattern::user_space(dot(), r(1.0e8, 0.0, 10.0, 10.0));
        let tiles: Vec<Tile> = p.tiles(r(0.0, 0.0, 25.0, 10.0)).collect();

        let xs: Vec<f32> = tiles.iter().map(|t| t.origin.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0]);
        assert_eq!(area(&tiles), 250.0);
    }

    #[test]
    fn grid_extends_before_cell_origin() {
        let p = Pattern::user_space(dot(), r(5.0, 0.0, 10.0, 10.0));
        let tiles: Vec<Tile> = p.tiles(r(0.0, 0.0, 20.0, 10.0)).collect();

        let xs: Vec<f32> = tiles.iter().map(|t| t.origin.x).collect();
        assert_eq!(xs, vec![-5.0, 5.0, 15.0]);
        assert_eq!(tiles[0].clip, r(0.0, 0.0, 5.0, 10.0));
        assert_eq!(tiles[2].clip, r(15.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn tiles_walk_rows_in_order() {
        let p = Pattern::object_bounding_box(dot(), r(0.0, 0.0, 0.5, 0.5));
        let origins: Vec<Vec2> = p.tiles(r(0.0, 0.0, 20.0, 20.0)).map(|t| t.origin).collect();
        assert_eq!(
            origins,
            vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0)]
        );
    }

    #[test]
    fn degenerate_inputs_yield_no_tiles() {
        let zero = Pattern::user_space(dot(), r(0.0, 0.0, 0.0, 0.0));
        assert_eq!(zero.tiles(r(0.0, 0.0, 100.0, 100.0)).count(), 0);
        assert_eq!(zero.tiles(r(0.0, 0.0, 100.0, 100.0)).tile_count(), 0);

        let p = Pattern::user_space(dot(), r(0.0, 0.0, 10.0, 10.0));
        assert_eq!(p.tiles(r(0.0, 0.0, 0.0, 10.0)).count(), 0);
        assert_eq!(p.tiles(r(0.0, 0.0, f32::NAN, 10.0)).count(), 0);
    }

    #[test]
    fn tile_count_tracks_progress() {
        let p = Pattern::user_space(dot(), r(0.0, 0.0, 10.0, 10.0));
        let mut tiles = p.tiles(r(0.0, 0.0, 30.0, 20.0));
        assert_eq!(tiles.tile_count(), 6);
        tiles.next();
        tiles.next();
        assert_eq!(tiles.tile_count(), 4);
        tiles.next();
        assert_eq!(tiles.tile_count(), 3);
    }

    #[test]
    fn tile_count_is_known_before_iterating() {
        let p = Pattern::user_space(dot(), r(0.0, 0.0, 0.25, 0.25));
        assert_eq!(p.tiles(r(0.0, 0.0, 1024.0, 1024.0)).tile_count(), 4096 * 4096);
    }

    #[test]
    fn patterns_are_shareable() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Pattern>();
    }
}
