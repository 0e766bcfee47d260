//! Filter selection state.
//!
//! Holds the currently chosen region slugs, category slugs, and an
//! optional platform tag. Order of insertion is preserved but carries
//! no meaning for matching; membership is what counts. Values decoded
//! from a URL may name slugs outside the vocabulary — those stay in
//! the set and simply never match anything.

use serde::Serialize;

/// The mutable filter state shared by the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub regions: Vec<String>,
    pub categories: Vec<String>,
    pub platform: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of a region slug. Returns true if the slug is
    /// selected after the call.
    pub fn toggle_region(&mut self, slug: &str) -> bool {
        toggle(&mut self.regions, slug)
    }

    /// Toggle membership of a category slug. Returns true if the slug
    /// is selected after the call.
    pub fn toggle_category(&mut self, slug: &str) -> bool {
        toggle(&mut self.categories, slug)
    }

    pub fn contains_region(&self, slug: &str) -> bool {
        self.regions.iter().any(|s| s == slug)
    }

    pub fn contains_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|s| s == slug)
    }

    /// Replace the region set wholesale.
    pub fn set_regions(&mut self, slugs: Vec<String>) {
        self.regions = slugs;
    }

    /// Replace the category set wholesale.
    pub fn set_categories(&mut self, slugs: Vec<String>) {
        self.categories = slugs;
    }

    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    /// True iff the selected set covers the whole vocabulary. Checks
    /// size only; vocabularies are duplicate-free.
    pub fn is_all_regions(&self, vocabulary_len: usize) -> bool {
        self.regions.len() == vocabulary_len
    }

    /// True iff the selected set covers the whole vocabulary.
    pub fn is_all_categories(&self, vocabulary_len: usize) -> bool {
        self.categories.len() == vocabulary_len
    }

    /// True when neither facet dimension has a selection.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.categories.is_empty()
    }

    pub fn select_platform(&mut self, slug: impl Into<String>) {
        self.platform = Some(slug.into());
    }
}

fn toggle(set: &mut Vec<String>, slug: &str) -> bool {
    if let Some(index) = set.iter().position(|s| s == slug) {
        set.remove(index);
        false
    } else {
        set.push(slug.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle_region("eu"));
        assert!(selection.contains_region("eu"));
        assert!(!selection.toggle_region("eu"));
        assert!(!selection.contains_region("eu"));
    }

    #[test]
    fn region_and_category_sets_are_independent() {
        let mut selection = Selection::new();
        selection.toggle_region("crm");
        assert!(selection.contains_region("crm"));
        assert!(!selection.contains_category("crm"));
    }

    #[test]
    fn is_all_compares_sizes() {
        let mut selection = Selection::new();
        selection.set_regions(vec!["a".into(), "b".into()]);
        assert!(selection.is_all_regions(2));
        assert!(!selection.is_all_regions(3));
    }

    #[test]
    fn wholesale_replacement() {
        let mut selection = Selection::new();
        selection.toggle_category("crm");
        selection.set_categories(vec!["payments".into(), "security".into()]);
        assert!(!selection.contains_category("crm"));
        assert!(selection.contains_category("payments"));
        selection.clear_categories();
        assert!(selection.categories.is_empty());
    }
}
