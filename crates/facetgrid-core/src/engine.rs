//! Matching and relevance scoring.
//!
//! Recomputation is total and stateless: every pass rebuilds the
//! derived state for the entire item set from the current selection.
//! There is no incremental update, which rules out stale-state bugs at
//! the cost of O(items x facets-per-item) work per filter change —
//! fine at catalog scale.

use crate::catalog::Item;
use crate::selection::Selection;

/// Derived per-item state, owned by the session and rebuilt on every
/// filter change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Whether the item satisfies the combined facet selection
    pub active: bool,
    /// Count of matched facet values across both dimensions. Computed
    /// for inactive items too, but only meaningful for active ones.
    pub score: u32,
}

/// Evaluate a single item against the selection.
///
/// A dimension with no selection matches everything and contributes no
/// score. When both dimensions have selections, the item must match
/// both (AND across dimensions); within a dimension any overlap
/// suffices (OR within a dimension).
pub fn evaluate(item: &Item, selection: &Selection) -> ItemState {
    let matched_regions = if selection.regions.is_empty() {
        0
    } else {
        item.regions
            .iter()
            .filter(|slug| selection.contains_region(slug))
            .count()
    };

    let matched_categories = if selection.categories.is_empty() {
        0
    } else {
        item.categories
            .iter()
            .filter(|category| selection.contains_category(&category.slug))
            .count()
    };

    let region_match = selection.regions.is_empty() || matched_regions > 0;
    let category_match = selection.categories.is_empty() || matched_categories > 0;

    ItemState {
        active: region_match && category_match,
        score: (matched_regions + matched_categories) as u32,
    }
}

/// Rebuild `active`/`score` for every item. Returns the active count.
#[tracing::instrument(skip(items, selection, states), fields(items = items.len()))]
pub fn apply_filters(items: &[Item], selection: &Selection, states: &mut Vec<ItemState>) -> usize {
    states.clear();
    states.reserve(items.len());

    let mut active = 0;
    for item in items {
        let state = evaluate(item, selection);
        if state.active {
            active += 1;
            tracing::trace!(
                id = item.id,
                title = %item.title,
                score = state.score,
                "item matched"
            );
        }
        states.push(state);
    }

    tracing::debug!(
        active,
        total = items.len(),
        regions = ?selection.regions,
        categories = ?selection.categories,
        "filters applied"
    );

    active
}
