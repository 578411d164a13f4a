use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + scissor rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in canvas coordinates. `None` = unclipped.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for one paint pass.
///
/// # Clipping
///
/// [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) scope commands to a
/// scissor rect. Nested clips are intersected with their parent, so a pattern tile
/// inside a clipped viewport only ever paints the overlap of both.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective clip, already intersected with every parent.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items and clips, keeping allocations for the next pass.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of clip scopes currently open.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Records `cmd` on layer `z`, clipped by the current clip scope.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
        self.sorted_dirty = true;
    }

    /// Opens a clip scope. Must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect.normalized(),
            // Disjoint clips collapse to a zero-area rect; everything inside is invisible.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    /// Closes the innermost clip scope.
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(2), r(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.push_solid_rect(ZIndex(1), r(1.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.push_solid_rect(ZIndex(1), r(2.0, 0.0, 1.0, 1.0), Color::BLACK);

        let orders: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(orders, vec![1, 2, 0]);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn items_inherit_current_clip() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), r(0.0, 0.0, 5.0, 5.0), Color::BLACK);
        list.push_clip(r(0.0, 0.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), r(0.0, 0.0, 5.0, 5.0), Color::BLACK);
        list.pop_clip();

        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(list.items()[1].clip_rect, Some(r(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(r(0.0, 0.0, 10.0, 10.0));
        list.push_clip(r(5.0, 5.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), r(0.0, 0.0, 20.0, 20.0), Color::BLACK);

        assert_eq!(list.items()[0].clip_rect, Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn disjoint_nested_clip_is_empty() {
        let mut list = DrawList::new();
        list.push_clip(r(0.0, 0.0, 10.0, 10.0));
        list.push_clip(r(50.0, 50.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), r(0.0, 0.0, 20.0, 20.0), Color::BLACK);

        assert!(list.items()[0].clip_rect.is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.push_clip(r(0.0, 0.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), r(0.0, 0.0, 5.0, 5.0), Color::BLACK);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.clip_depth(), 0);
    }
}
