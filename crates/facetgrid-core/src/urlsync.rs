//! URL synchronization protocol.
//!
//! Bidirectional codec between the filter selection and a page query
//! string, plus a small history abstraction standing in for the
//! browser's pushState/popstate pair. Encoding preserves unrelated
//! query parameters and strips the legacy array-style ones
//! (`region[]`, `category[]`) on every write.

use url::form_urlencoded;

use crate::catalog::Catalog;
use crate::selection::Selection;

pub const PARAM_REGION: &str = "region";
pub const PARAM_CATEGORY: &str = "category";
/// Sentinel meaning "every slug in the vocabulary"
pub const ALL_SENTINEL: &str = "all";

/// Legacy parameters recognized only for deletion, never read.
const LEGACY_PARAMS: [&str; 2] = ["region[]", "category[]"];

/// Encode the selection into a query string, carrying over every
/// unrelated parameter from `existing_query`.
pub fn encode(existing_query: &str, selection: &Selection, catalog: &Catalog) -> String {
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(existing_query.as_bytes())
        .into_owned()
        .filter(|(key, _)| {
            key != PARAM_REGION && key != PARAM_CATEGORY && !LEGACY_PARAMS.contains(&key.as_str())
        })
        .collect();

    if let Some(value) = facet_value(&selection.regions, catalog.regions.len()) {
        pairs.push((PARAM_REGION.to_string(), value));
    }
    if let Some(value) = facet_value(&selection.categories, catalog.categories.len()) {
        pairs.push((PARAM_CATEGORY.to_string(), value));
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// `all` when the whole vocabulary is selected, CSV for a partial
/// selection, `None` (parameter removed) for an empty one.
fn facet_value(selected: &[String], vocabulary_len: usize) -> Option<String> {
    if vocabulary_len > 0 && selected.len() == vocabulary_len {
        Some(ALL_SENTINEL.to_string())
    } else if !selected.is_empty() {
        Some(selected.join(","))
    } else {
        None
    }
}

/// Decode a query string into a fresh selection. Never fails: missing
/// or empty parameters mean an empty selection, unknown slugs are kept
/// as inert members, and empty CSV segments are dropped.
pub fn decode(query: &str, catalog: &Catalog) -> Selection {
    let mut selection = Selection::new();
    selection.set_regions(decode_facet(
        param(query, PARAM_REGION).as_deref(),
        || catalog.region_slugs(),
    ));
    selection.set_categories(decode_facet(
        param(query, PARAM_CATEGORY).as_deref(),
        || catalog.category_slugs(),
    ));
    selection
}

fn decode_facet(value: Option<&str>, vocabulary: impl FnOnce() -> Vec<String>) -> Vec<String> {
    match value {
        Some(ALL_SENTINEL) => vocabulary(),
        Some(csv) if !csv.is_empty() => {
            let mut slugs: Vec<String> = Vec::new();
            for slug in csv.split(',') {
                if !slug.is_empty() && !slugs.iter().any(|s| s == slug) {
                    slugs.push(slug.to_string());
                }
            }
            slugs
        }
        _ => Vec::new(),
    }
}

/// First occurrence of a parameter, decoded.
fn param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Non-reloading history sink, the pushState analogue. Back/forward
/// default to "unsupported" so a write-only sink stays trivial.
pub trait History {
    /// Push a new query string without a reload.
    fn push(&mut self, query: &str);

    /// The query string of the current history entry.
    fn current(&self) -> &str;

    /// Step back, returning the query now current.
    fn back(&mut self) -> Option<String> {
        None
    }

    /// Step forward, returning the query now current.
    fn forward(&mut self) -> Option<String> {
        None
    }
}

/// In-memory history with full back/forward traversal. Pushing from
/// the middle of the stack drops the forward entries, as a browser
/// does.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::with_initial("")
    }

    pub fn with_initial(query: impl Into<String>) -> Self {
        Self {
            entries: vec![query.into()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, query: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FacetOption;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                FacetOption::new("Europe", "europe"),
                FacetOption::new("North America", "north-america"),
            ],
            vec![
                FacetOption::new("CRM", "crm"),
                FacetOption::new("Payments", "payments"),
                FacetOption::new("Security", "security"),
            ],
            Vec::new(),
        )
    }

    fn selection(regions: &[&str], categories: &[&str]) -> Selection {
        let mut s = Selection::new();
        s.set_regions(regions.iter().map(|r| r.to_string()).collect());
        s.set_categories(categories.iter().map(|c| c.to_string()).collect());
        s
    }

    #[test]
    fn all_selected_writes_sentinel() {
        let query = encode(
            "",
            &selection(&["europe", "north-america"], &[]),
            &catalog(),
        );
        assert_eq!(query, "region=all");
    }

    #[test]
    fn partial_selection_writes_csv() {
        let query = encode("", &selection(&[], &["crm", "payments"]), &catalog());
        assert_eq!(query, "category=crm%2Cpayments");
    }

    #[test]
    fn empty_selection_removes_parameter() {
        let query = encode("region=all&category=all", &selection(&[], &[]), &catalog());
        assert_eq!(query, "");
    }

    #[test]
    fn legacy_array_params_are_stripped() {
        let query = encode(
            "region%5B%5D=europe&category%5B%5D=crm&page=2",
            &selection(&["europe"], &[]),
            &catalog(),
        );
        assert_eq!(query, "page=2&region=europe");
    }

    #[test]
    fn unrelated_params_survive() {
        let query = encode("utm_source=mail&ref=nav", &selection(&["europe"], &[]), &catalog());
        assert!(query.contains("utm_source=mail"));
        assert!(query.contains("ref=nav"));
        assert!(query.contains("region=europe"));
    }

    #[test]
    fn all_sentinel_round_trips() {
        let all = selection(&["europe", "north-america"], &[]);
        let query = encode("", &all, &catalog());
        let decoded = decode(&query, &catalog());
        assert_eq!(decoded.regions, vec!["europe", "north-america"]);
    }

    #[test]
    fn partial_set_round_trips_exactly() {
        let partial = selection(&[], &["payments", "crm"]);
        let query = encode("", &partial, &catalog());
        let decoded = decode(&query, &catalog());
        assert_eq!(decoded.categories, vec!["payments", "crm"]);
    }

    #[test]
    fn decode_all_expands_vocabulary() {
        let decoded = decode("region=all", &catalog());
        assert_eq!(decoded.regions, vec!["europe", "north-america"]);
    }

    #[test]
    fn decode_absent_is_empty() {
        let decoded = decode("", &catalog());
        assert!(decoded.regions.is_empty());
        assert!(decoded.categories.is_empty());
    }

    #[test]
    fn decode_empty_value_is_absent() {
        let decoded = decode("region=&category=crm", &catalog());
        assert!(decoded.regions.is_empty());
        assert_eq!(decoded.categories, vec!["crm"]);
    }

    #[test]
    fn decode_keeps_unknown_slugs() {
        let decoded = decode("region=bogus", &catalog());
        assert_eq!(decoded.regions, vec!["bogus"]);
    }

    #[test]
    fn decode_drops_empty_segments_and_duplicates() {
        let decoded = decode("category=crm,,crm,payments", &catalog());
        assert_eq!(decoded.categories, vec!["crm", "payments"]);
    }

    #[test]
    fn memory_history_back_and_forward() {
        let mut history = MemoryHistory::new();
        history.push("region=all");
        history.push("region=europe");

        assert_eq!(history.current(), "region=europe");
        assert_eq!(history.back().as_deref(), Some("region=all"));
        assert_eq!(history.back().as_deref(), Some(""));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward().as_deref(), Some("region=all"));
    }

    #[test]
    fn push_from_middle_drops_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("a=1");
        history.push("a=2");
        history.back();
        history.push("a=3");

        assert_eq!(history.current(), "a=3");
        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 3);
    }
}
