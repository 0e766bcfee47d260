//! Ranking and the pagination window.
//!
//! Active items are ordered by sponsor priority first (ascending —
//! paid placement dominates relevance), then by relevance score
//! (descending), and ties keep original catalog order via the stable
//! sort. The visible page is always a prefix of that order, bounded by
//! the current page size.

use crate::catalog::Item;
use crate::engine::ItemState;

/// Page size on first render.
pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 12;
/// Increment applied by each "load more".
pub const DEFAULT_PAGE_STEP: usize = 12;

/// Bounded, grow-only view over the ranked active items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    initial: usize,
    step: usize,
    page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_PAGE_SIZE, DEFAULT_PAGE_STEP)
    }
}

impl PageWindow {
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            initial,
            step,
            page_size: initial,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Grow the window by one step. Saturates arithmetically; growing
    /// past the active-item count is harmless since the visible slice
    /// clamps.
    pub fn load_more(&mut self) {
        self.page_size = self.page_size.saturating_add(self.step);
    }

    /// Shrink back to the initial size. The only way page size ever
    /// decreases within a session.
    pub fn reset(&mut self) {
        self.page_size = self.initial;
    }

    /// True iff more active items exist than the window shows.
    pub fn has_more(&self, active_count: usize) -> bool {
        active_count > self.page_size
    }

    /// Number of items actually visible for a given active count.
    pub fn visible_len(&self, active_count: usize) -> usize {
        active_count.min(self.page_size)
    }
}

/// Rank the active items: priority ascending, then score descending,
/// catalog order on full ties. Returns indices into `items`.
pub fn rank(items: &[Item], states: &[ItemState]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len())
        .filter(|&index| states.get(index).is_some_and(|s| s.active))
        .collect();

    // Stable sort over catalog-ordered indices keeps insertion order
    // for equal keys.
    order.sort_by(|&a, &b| {
        items[a]
            .priority
            .cmp(&items[b].priority)
            .then_with(|| states[b].score.cmp(&states[a].score))
    });

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, priority: i64) -> Item {
        Item {
            id,
            title: format!("Item {id}"),
            link: String::new(),
            regions: Vec::new(),
            thumbnail: None,
            excerpt: String::new(),
            categories: Vec::new(),
            priority,
            platform: Vec::new(),
        }
    }

    fn state(active: bool, score: u32) -> ItemState {
        ItemState { active, score }
    }

    #[test]
    fn priority_dominates_score() {
        let items = vec![item(1, 5), item(2, 1)];
        let states = vec![state(true, 100), state(true, 0)];
        assert_eq!(rank(&items, &states), vec![1, 0]);
    }

    #[test]
    fn score_breaks_priority_ties() {
        let items = vec![item(1, 5), item(2, 5)];
        let states = vec![state(true, 3), state(true, 7)];
        assert_eq!(rank(&items, &states), vec![1, 0]);
    }

    #[test]
    fn full_ties_keep_catalog_order() {
        let items = vec![item(1, 5), item(2, 5), item(3, 5)];
        let states = vec![state(true, 2), state(true, 2), state(true, 2)];
        assert_eq!(rank(&items, &states), vec![0, 1, 2]);
    }

    #[test]
    fn inactive_items_are_excluded() {
        let items = vec![item(1, 1), item(2, 2)];
        let states = vec![state(false, 9), state(true, 0)];
        assert_eq!(rank(&items, &states), vec![1]);
    }

    #[test]
    fn load_more_grows_monotonically() {
        let mut window = PageWindow::new(12, 12);
        for k in 1..=4 {
            window.load_more();
            assert_eq!(window.page_size(), 12 + k * 12);
        }
    }

    #[test]
    fn visible_len_saturates_at_active_count() {
        let mut window = PageWindow::new(12, 12);
        assert_eq!(window.visible_len(5), 5);
        window.load_more();
        assert_eq!(window.visible_len(5), 5);
        assert_eq!(window.visible_len(40), 24);
    }

    #[test]
    fn has_more_boundary() {
        let window = PageWindow::new(12, 12);
        assert!(!window.has_more(12));
        assert!(window.has_more(13));
    }

    #[test]
    fn reset_restores_initial_size() {
        let mut window = PageWindow::new(6, 6);
        window.load_more();
        window.load_more();
        assert_eq!(window.page_size(), 18);
        window.reset();
        assert_eq!(window.page_size(), 6);
    }
}
